use std::io::stdout;
use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{CrosstermBackend, TestBackend};
use tracing::info;

use crate::config::Settings;
use crate::game::Board;
use crate::io::{InputChannel, KeyListener};
use crate::ui::TuiRenderer;

pub mod game_loop;

pub use game_loop::{EndReason, GameLoop, Outcome, Phase};

const HEADLESS_SIZE: (u16, u16) = (80, 24);

pub fn run(settings: &Settings) -> Result<Outcome> {
    let board = Board::with_seed(settings.height, settings.seed)
        .with_context(|| format!("cannot build a board of height {}", settings.height))?;
    if settings.headless {
        run_headless(board, settings)
    } else {
        run_interactive(board, settings)
    }
}

fn run_interactive(board: Board, settings: &Settings) -> Result<Outcome> {
    let _guard = TuiGuard::enter()?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout())).context("failed to build terminal backend")?;
    terminal.clear().context("failed to clear terminal")?;
    let input = InputChannel::new();
    let listener = KeyListener::spawn(input.clone());
    let quit = listener.quit_signal();

    let mut game = GameLoop::new(
        board,
        input,
        TuiRenderer::new(terminal),
        settings.tick_interval,
    )
    .with_quit_signal(quit.clone());
    let outcome = game.run()?;

    if outcome.reason == EndReason::Collided {
        // Hold the final frame until the player acknowledges it.
        listener.take_key_press();
        while !listener.take_key_press() && !quit.load(Ordering::Acquire) {
            thread::sleep(settings.tick_interval);
        }
    }
    drop(listener);
    Ok(outcome)
}

fn run_headless(board: Board, settings: &Settings) -> Result<Outcome> {
    let (width, height) = HEADLESS_SIZE;
    let terminal =
        Terminal::new(TestBackend::new(width, height)).context("failed to build test backend")?;
    let mut game = GameLoop::new(
        board,
        InputChannel::new(),
        TuiRenderer::new(terminal),
        Duration::ZERO,
    )
    .with_tick_budget(settings.headless_ticks);
    let outcome = game.run()?;
    info!(
        target: "flappy::headless",
        ticks = outcome.ticks,
        reason = ?outcome.reason,
        budget = settings.headless_ticks,
        "headless run completed"
    );
    Ok(outcome)
}

/// Raw mode plus alternate screen for the lifetime of the session.
struct TuiGuard;

impl TuiGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        execute!(stdout(), EnterAlternateScreen, Hide)
            .context("failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::error!(?err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(stdout(), LeaveAlternateScreen, Show) {
            tracing::error!(?err, "failed to leave alternate screen");
        }
    }
}
