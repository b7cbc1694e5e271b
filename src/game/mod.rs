pub mod board;
pub mod cell;
mod obstacles;

pub use board::{Board, BoardError, Snapshot};
pub use cell::{Cell, CellState, Direction, Neighbors, Pos};
