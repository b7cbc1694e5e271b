use anyhow::{Context, Result};
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::game::Snapshot;

mod render;

pub use render::draw_game;

/// Consumer of one board snapshot per tick.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot) -> Result<()>;
}

/// Draws snapshots with ratatui onto any backend.
pub struct TuiRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TuiRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }
}

impl<B: Backend> Renderer for TuiRenderer<B> {
    fn render(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.terminal
            .draw(|frame| draw_game(frame, snapshot))
            .context("failed to draw frame")?;
        Ok(())
    }
}
