//! Gridlock: a two-player blockade game on a 7x7 grid
//!
//! Each side starts with the same number of pieces; a move slides one piece
//! one step into an orthogonally adjacent empty cell. A player with no
//! legal move on their turn loses immediately; otherwise, once both sides
//! have spent a configured turn budget, the side whose pieces can reach the
//! larger number of distinct empty cells wins.
//!
//! This crate provides:
//! - Complete game rules: move legality, application, immobilization, and
//!   unique reachable-cell scoring
//! - A decision engine that builds the exhaustive game tree to a ply bound
//!   and extracts a move with a deepest-leaf max procedure
//! - A session type driving turn budgets and end conditions
//! - An interactive CLI for playing against the engine and analyzing
//!   positions

pub mod cli;
pub mod engine;
pub mod error;
pub mod game;

pub use engine::{choose_move, evaluate};
pub use error::{Error, Result};
pub use game::{
    unique_reachable_cells, Board, Cell, Coord, Direction, Game, GameOutcome, Move, Player,
    BOARD_SIZE,
};
