use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::info;

use crate::config::{LENGTH_FACTOR, MAX_BOARD_HEIGHT, MIN_BOARD_HEIGHT, PLAYER_START};
use crate::game::{Cell, CellState, Direction, Neighbors, Pos};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board height {height} is below the minimum of {min}")]
    HeightTooSmall { height: usize, min: usize },
    #[error("board height {height} is above the maximum of {max}")]
    HeightTooLarge { height: usize, max: usize },
}

/// Immutable copy of the grid handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub tick: u64,
    pub height: usize,
    pub length: usize,
    pub cells: Vec<CellState>,
    pub over: bool,
}

impl Snapshot {
    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[row * self.length + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.length)
    }
}

pub struct Board {
    height: usize,
    length: usize,
    cells: Vec<Cell>,
    player: Pos,
    pub(super) rng: StdRng,
}

impl Board {
    pub fn new(height: usize) -> Result<Self, BoardError> {
        Self::with_seed(height, None)
    }

    pub fn with_seed(height: usize, seed: Option<u64>) -> Result<Self, BoardError> {
        if height < MIN_BOARD_HEIGHT {
            return Err(BoardError::HeightTooSmall {
                height,
                min: MIN_BOARD_HEIGHT,
            });
        }
        if height > MAX_BOARD_HEIGHT {
            return Err(BoardError::HeightTooLarge {
                height,
                max: MAX_BOARD_HEIGHT,
            });
        }
        let length = height * LENGTH_FACTOR;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut board = Self {
            height,
            length,
            cells: vec![Cell::default(); height * length],
            player: PLAYER_START,
            rng,
        };
        board.set_walls();
        board.link_interior();
        board.set(PLAYER_START, CellState::Player);
        Ok(board)
    }

    fn set_walls(&mut self) {
        for row in 0..self.height {
            for col in [0, self.length - 1] {
                self.set((row, col), CellState::Wall);
            }
        }
        for col in 0..self.length {
            for row in [0, self.height - 1] {
                self.set((row, col), CellState::Wall);
            }
        }
    }

    fn link_interior(&mut self) {
        for row in 1..self.height - 1 {
            for col in 1..self.length - 1 {
                let idx = self.idx((row, col));
                self.cells[idx].link(Neighbors::of((row, col)));
            }
        }
    }

    fn idx(&self, pos: Pos) -> usize {
        pos.0 * self.length + pos.1
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn cell(&self, pos: Pos) -> &Cell {
        &self.cells[self.idx(pos)]
    }

    pub fn state(&self, pos: Pos) -> CellState {
        self.cell(pos).state
    }

    pub(super) fn set(&mut self, pos: Pos, state: CellState) {
        let idx = self.idx(pos);
        self.cells[idx].state = state;
    }

    pub fn neighbor(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        self.cell(pos).neighbor(dir)
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        let (row, col) = pos;
        row == 0 || col == 0 || row == self.height - 1 || col == self.length - 1
    }

    pub fn is_over(&self) -> bool {
        self.state(self.player) == CellState::Collided
    }

    /// Puts an obstacle on an empty interior cell. Returns whether it was placed.
    pub fn place_obstacle(&mut self, pos: Pos) -> bool {
        if pos.0 >= self.height || pos.1 >= self.length || self.is_border(pos) {
            return false;
        }
        if self.state(pos) != CellState::Empty {
            return false;
        }
        self.set(pos, CellState::Obstacle);
        true
    }

    /// One simulation tick: player motion, then spawn, then obstacle advance.
    pub fn step(&mut self, tick: u64, flap: bool) {
        if self.is_over() {
            return;
        }
        self.move_player(flap);
        self.maybe_spawn(tick);
        self.advance_obstacles();
        if self.is_over() {
            info!(tick, row = self.player.0, col = self.player.1, "player collided");
        }
    }

    fn move_player(&mut self, flap: bool) {
        let dir = if flap { Direction::Up } else { Direction::Down };
        // A live player is always interior, so it always has links.
        let Some(next) = self.neighbor(self.player, dir) else {
            self.set(self.player, CellState::Collided);
            return;
        };
        self.set(self.player, CellState::Empty);
        self.player = next;
        let landed = if self.state(next) == CellState::Empty {
            CellState::Player
        } else {
            CellState::Collided
        };
        self.set(next, landed);
    }

    pub(super) fn collide(&mut self) {
        self.set(self.player, CellState::Collided);
    }

    pub fn snapshot(&self, tick: u64) -> Snapshot {
        Snapshot {
            tick,
            height: self.height,
            length: self.length,
            cells: self.cells.iter().map(|cell| cell.state).collect(),
            over: self.is_over(),
        }
    }
}
