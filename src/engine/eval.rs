//! Heuristic board evaluation

use crate::game::{Board, Coord, Player, BOARD_SIZE};

/// Weight on the perspective player's mobility.
const OWN_MOBILITY_WEIGHT: f64 = 0.6;
/// Weight on the opponent's mobility.
const OPPONENT_MOBILITY_WEIGHT: f64 = 0.4;

/// Score `board` from `perspective`'s point of view.
///
/// One row-major pass over the board: each of the perspective player's
/// pieces adds `0.6 x` its empty-neighbor count, each opponent piece
/// subtracts `0.4 x` its count. The accumulator is an integer and every
/// term is truncated toward zero as it is applied; replacing this with a
/// single rounding of the exact sum gives different scores, so keep the
/// per-term truncation. Pieces with no empty neighbor contribute zero.
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    let own = perspective.to_cell();
    let opponent = perspective.opponent().to_cell();

    let mut score: i32 = 0;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let coord = Coord { row, col };
            let cell = board.get(coord);
            if cell == own {
                score += (board.empty_neighbor_count(coord) as f64 * OWN_MOBILITY_WEIGHT) as i32;
            } else if cell == opponent {
                score -=
                    (board.empty_neighbor_count(coord) as f64 * OPPONENT_MOBILITY_WEIGHT) as i32;
            }
        }
    }
    score
}
