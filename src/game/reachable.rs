//! Unique reachable-cell enumeration
//!
//! A reachable cell is an empty cell orthogonally adjacent to at least one
//! of a player's pieces. The count of distinct reachable cells decides the
//! game when the turn budget runs out.

use super::board::{Board, Player};
use super::coord::{Coord, BOARD_SIZE};

/// Distinct empty cells adjacent to any of `player`'s pieces.
///
/// The board is scanned in row-major piece order, probing neighbors in the
/// fixed Up/Down/Left/Right order; each cell is recorded at its first
/// discovery and silently skipped afterwards, so a cell adjacent to two
/// pieces counts once. The returned order is first-discovery order.
pub fn unique_reachable_cells(board: &Board, player: Player) -> Vec<Coord> {
    let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut cells = Vec::new();

    for piece in board.piece_coords(player) {
        for neighbor in piece.neighbors() {
            if board.is_empty(neighbor) && !seen[neighbor.row][neighbor.col] {
                seen[neighbor.row][neighbor.col] = true;
                cells.push(neighbor);
            }
        }
    }

    cells
}
