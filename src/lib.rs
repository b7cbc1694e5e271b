//! Terminal flappy-bird on a walled cell grid.

pub mod app;
pub mod config;
pub mod game;
pub mod io;
pub mod ui;

pub use app::{EndReason, GameLoop, Outcome};
pub use config::Settings;
pub use game::{Board, BoardError, CellState, Snapshot};
pub use io::InputChannel;
