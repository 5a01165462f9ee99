//! Error types for the gridlock crate

use thiserror::Error;

use crate::game::{Coord, Player};

/// Main error type for the gridlock crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move for {player}: {from} to {to}")]
    IllegalMove {
        player: Player,
        from: Coord,
        to: Coord,
    },

    #[error("invalid coordinate '{text}' (expected row 'a'-'g' and column '1'-'7', e.g. 'c4')")]
    InvalidCoordinate { text: String },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("cell {coord} is already occupied")]
    OccupiedCell { coord: Coord },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("game already over")]
    GameOver,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
