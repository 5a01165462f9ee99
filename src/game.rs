//! Game domain: the 7x7 board, move rules, reachability, and sessions

pub mod board;
pub mod coord;
pub mod reachable;
pub mod session;
pub mod setup;

pub use board::{Board, Cell, Move, Player};
pub use coord::{Coord, Direction, BOARD_SIZE};
pub use reachable::unique_reachable_cells;
pub use session::{Game, GameOutcome};
