use rand::Rng;
use tracing::{debug, trace};

use crate::config::{GAP_HEIGHT, GAP_MIN_ROW, SPAWN_PERIOD};
use crate::game::{CellState, Direction, Pos};

use super::Board;

impl Board {
    /// Column where new obstacle columns appear, one inside the right wall.
    pub fn spawn_col(&self) -> usize {
        self.length() - 2
    }

    /// Inclusive range of rows the top of a gap may start at.
    pub fn gap_rows(&self) -> (usize, usize) {
        let upper = (2 * self.height() / 3).min(self.height().saturating_sub(4));
        (GAP_MIN_ROW, upper.max(GAP_MIN_ROW))
    }

    pub(super) fn maybe_spawn(&mut self, tick: u64) {
        if tick % SPAWN_PERIOD != 0 || !self.rng.gen_bool(0.5) {
            return;
        }
        let (low, high) = self.gap_rows();
        let gap_top = self.rng.gen_range(low..=high);
        self.spawn_column(gap_top);
        debug!(tick, gap_top, "spawned obstacle column");
    }

    /// Fills the spawn column with obstacles, leaving a gap starting at `gap_top`.
    pub fn spawn_column(&mut self, gap_top: usize) {
        let col = self.spawn_col();
        let floor = self.height() - 1;
        for row in 1..floor {
            self.set((row, col), CellState::Obstacle);
        }
        for row in (gap_top..gap_top + GAP_HEIGHT).filter(|row| (1..floor).contains(row)) {
            self.set((row, col), CellState::Empty);
        }
    }

    /// Shifts every obstacle one column left. Moves are planned against the
    /// positions held at the start of the call and applied afterwards.
    pub(super) fn advance_obstacles(&mut self) {
        let mut current: Vec<Pos> = Vec::new();
        for row in 0..self.height() {
            for col in 0..self.length() {
                if self.state((row, col)) == CellState::Obstacle {
                    current.push((row, col));
                }
            }
        }

        let player = self.player();
        let mut landed = Vec::with_capacity(current.len());
        let mut blocked = false;
        for &pos in &current {
            let Some(left) = self.neighbor(pos, Direction::Left) else {
                continue;
            };
            if left == player {
                blocked = true;
                landed.push(pos);
            } else if self.state(left) != CellState::Wall {
                landed.push(left);
            }
        }

        for &pos in &current {
            self.set(pos, CellState::Empty);
        }
        for &pos in &landed {
            self.set(pos, CellState::Obstacle);
        }
        if blocked {
            self.collide();
        }
        trace!(moved = current.len(), kept = landed.len(), "advanced obstacles");
    }
}
