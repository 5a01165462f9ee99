//! Grid coordinates, slide directions, and the textual coordinate form

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The board is a fixed 7x7 grid; it is never resized.
pub const BOARD_SIZE: usize = 7;

/// A direction of a single-step slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The fixed probe order used by every board scan in this crate.
    ///
    /// Reachability enumeration and tree expansion both depend on this
    /// order; changing it changes discovery order and therefore which of
    /// several equally scored moves the engine picks.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A cell coordinate with row and column both in `0..7`.
///
/// The textual form used at the I/O boundary writes the row as a letter
/// `a`-`g` and the column as a digit `1`-`7`, so `c4` is row 2, column 3.
/// Internally everything is zero-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate, returning `None` when either index is off the board.
    pub fn new(row: usize, col: usize) -> Option<Coord> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Parse the textual form (`a1` through `g7`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoordinate`] for anything that is not
    /// exactly a row letter followed by a column digit in range.
    pub fn parse(text: &str) -> crate::Result<Coord> {
        let invalid = || crate::Error::InvalidCoordinate {
            text: text.to_string(),
        };

        let trimmed = text.trim();
        let mut chars = trimmed.chars();
        let row_char = chars.next().ok_or_else(invalid)?;
        let col_char = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }

        let row_char = row_char.to_ascii_lowercase();
        if !('a'..='g').contains(&row_char) || !('1'..='7').contains(&col_char) {
            return Err(invalid());
        }

        Ok(Coord {
            row: row_char as usize - 'a' as usize,
            col: col_char as usize - '1' as usize,
        })
    }

    /// The neighboring coordinate one step in `dir`, if it stays on the board.
    pub fn step(self, dir: Direction) -> Option<Coord> {
        let (dr, dc) = dir.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Coord::new(row, col)
    }

    /// On-board orthogonal neighbors, in the fixed [`Direction::ALL`] order.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }

    /// Manhattan distance to another coordinate.
    pub fn manhattan_distance(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.row as u8) as char,
            (b'1' + self.col as u8) as char
        )
    }
}

impl FromStr for Coord {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Coord> {
        Coord::parse(s)
    }
}
