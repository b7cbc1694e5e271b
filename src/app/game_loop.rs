use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, trace};

use crate::game::Board;
use crate::io::InputChannel;
use crate::ui::Renderer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    Collided,
    Quit,
    TickBudget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Ticks survived; doubles as the score.
    pub ticks: u64,
    pub reason: EndReason,
}

pub struct GameLoop<R: Renderer> {
    board: Board,
    input: InputChannel,
    renderer: R,
    interval: Duration,
    tick: u64,
    phase: Phase,
    quit: Option<Arc<AtomicBool>>,
    max_ticks: Option<u64>,
}

impl<R: Renderer> GameLoop<R> {
    pub fn new(board: Board, input: InputChannel, renderer: R, interval: Duration) -> Self {
        Self {
            board,
            input,
            renderer,
            interval,
            tick: 0,
            phase: Phase::Running,
            quit: None,
            max_ticks: None,
        }
    }

    pub fn with_quit_signal(mut self, quit: Arc<AtomicBool>) -> Self {
        self.quit = Some(quit);
        self
    }

    pub fn with_tick_budget(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Runs ticks until the player collides, quit is requested or the budget runs out.
    pub fn run(&mut self) -> Result<Outcome> {
        info!(
            height = self.board.height(),
            length = self.board.length(),
            interval_ms = self.interval.as_millis() as u64,
            "game started"
        );
        let reason = loop {
            if let Some(reason) = self.end_reason() {
                break reason;
            }
            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
            self.step()?;
        };
        self.phase = Phase::Ended;
        let outcome = Outcome {
            ticks: self.tick,
            reason,
        };
        info!(score = outcome.ticks, reason = ?outcome.reason, "game ended");
        Ok(outcome)
    }

    /// One iteration without the sleep: consume input, advance the board, render.
    pub fn step(&mut self) -> Result<Phase> {
        if self.phase == Phase::Ended {
            return Ok(self.phase);
        }
        let flap = self.input.consume();
        self.board.step(self.tick, flap);
        self.renderer.render(&self.board.snapshot(self.tick))?;
        trace!(tick = self.tick, flap, "tick");
        self.tick += 1;
        if self.board.is_over() {
            self.phase = Phase::Ended;
        }
        Ok(self.phase)
    }

    fn end_reason(&self) -> Option<EndReason> {
        if self.board.is_over() {
            return Some(EndReason::Collided);
        }
        if self
            .quit
            .as_ref()
            .is_some_and(|quit| quit.load(Ordering::Acquire))
        {
            return Some(EndReason::Quit);
        }
        match self.max_ticks {
            Some(max) if self.tick >= max => Some(EndReason::TickBudget),
            _ => None,
        }
    }
}
