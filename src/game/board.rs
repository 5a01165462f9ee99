//! Board state representation and move rules

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coord::{Coord, BOARD_SIZE};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A single move: one piece sliding one step into an adjacent empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub fn new(from: Coord, to: Coord) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// The 7x7 board.
///
/// This type implements `Copy`: it is 49 one-byte cells, and tree expansion
/// takes a full snapshot per node, so cheap copies are the common case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get the cell at a coordinate
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    /// Check if a coordinate holds no piece
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Coordinates of `player`'s pieces in row-major order.
    ///
    /// Every scan in the crate (reachability, tree expansion, evaluation)
    /// visits pieces in this order.
    pub fn piece_coords(&self, player: Player) -> impl Iterator<Item = Coord> + '_ {
        let piece = player.to_cell();
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
            .filter(move |&coord| self.get(coord) == piece)
    }

    /// Number of pieces `player` has on the board
    pub fn piece_count(&self, player: Player) -> usize {
        self.piece_coords(player).count()
    }

    /// Number of empty orthogonal neighbors of a cell
    pub fn empty_neighbor_count(&self, coord: Coord) -> usize {
        coord.neighbors().filter(|&n| self.is_empty(n)).count()
    }

    /// Check whether a move is legal for `player`.
    ///
    /// A move is legal iff the source and destination are orthogonally
    /// adjacent (Manhattan distance exactly 1), the destination is empty,
    /// and the source holds `player`'s piece. There are no further
    /// preconditions; in particular, a move that leaves the mover with no
    /// follow-up move is still legal.
    pub fn is_legal_move(&self, player: Player, mv: Move) -> bool {
        mv.from.manhattan_distance(mv.to) == 1
            && self.is_empty(mv.to)
            && self.get(mv.from) == player.to_cell()
    }

    /// Apply a legal move, returning the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] without changing anything if
    /// the move is not legal for `player`.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, player: Player, mv: Move) -> crate::Result<Board> {
        if !self.is_legal_move(player, mv) {
            return Err(crate::Error::IllegalMove {
                player,
                from: mv.from,
                to: mv.to,
            });
        }

        let mut next = *self;
        next.set(mv.to, self.get(mv.from));
        next.set(mv.from, Cell::Empty);
        Ok(next)
    }

    /// Check if `player` has at least one legal move.
    ///
    /// Doubles as the immobilization-loss test and the tree builder's
    /// recursion stop condition.
    pub fn has_any_legal_move(&self, player: Player) -> bool {
        self.piece_coords(player)
            .any(|coord| coord.neighbors().any(|n| self.is_empty(n)))
    }

    /// Create a board from a string of 49 cell characters in row-major order.
    ///
    /// Whitespace is filtered out first; `X`, `O` and `.` are the canonical
    /// cell characters.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 49 non-whitespace characters remain or
    /// any character is not a valid cell representation.
    pub fn from_string(s: &str) -> crate::Result<Board> {
        let cleaned: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cleaned.len() < BOARD_SIZE * BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE * BOARD_SIZE,
                got: cleaned.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in cleaned.iter().take(BOARD_SIZE * BOARD_SIZE).enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
            board.cells[i / BOARD_SIZE][i % BOARD_SIZE] = cell;
        }
        Ok(board)
    }

    /// Canonical string representation: 49 characters, row-major.
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .flat_map(|row| row.iter().map(|&c| c.to_char()))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Render the human-facing grid: column headers `1`-`7`, row labels
    /// `a`-`g`, empty cells as blanks.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", col + 1)?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{}", (b'a' + row as u8) as char)?;
            for cell in cells {
                let c = match cell {
                    Cell::Empty => ' ',
                    other => other.to_char(),
                };
                write!(f, " {c}")?;
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
