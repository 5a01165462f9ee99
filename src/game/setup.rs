//! Initial piece placement

use rand::Rng;

use super::board::{Board, Player};
use super::coord::{Coord, BOARD_SIZE};

/// Place one piece, returning the new board.
///
/// # Errors
///
/// Returns [`crate::Error::OccupiedCell`] if the cell already holds a piece.
#[must_use = "place_piece returns a new board; the original is unchanged"]
pub fn place_piece(board: &Board, player: Player, coord: Coord) -> crate::Result<Board> {
    if !board.is_empty(coord) {
        return Err(crate::Error::OccupiedCell { coord });
    }

    let mut next = *board;
    next.set(coord, player.to_cell());
    Ok(next)
}

/// Validate a per-side piece count against the board capacity.
fn validate_piece_count(pieces_per_side: usize) -> crate::Result<()> {
    let capacity = BOARD_SIZE * BOARD_SIZE;
    if pieces_per_side == 0 || pieces_per_side * 2 > capacity {
        return Err(crate::Error::InvalidConfiguration {
            message: format!(
                "pieces per side must be between 1 and {} (got {pieces_per_side})",
                capacity / 2
            ),
        });
    }
    Ok(())
}

/// Place `pieces_per_side` pieces for each side on random empty cells,
/// X's pieces first, rejection-sampling occupied cells.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidConfiguration`] for a zero count or one
/// that cannot fit on the board.
pub fn random_board<R: Rng>(pieces_per_side: usize, rng: &mut R) -> crate::Result<Board> {
    validate_piece_count(pieces_per_side)?;

    let mut board = Board::new();
    for player in [Player::X, Player::O] {
        for _ in 0..pieces_per_side {
            loop {
                let coord = Coord {
                    row: rng.random_range(0..BOARD_SIZE),
                    col: rng.random_range(0..BOARD_SIZE),
                };
                if let Ok(next) = place_piece(&board, player, coord) {
                    board = next;
                    break;
                }
            }
        }
    }
    Ok(board)
}

/// Build a board from explicit placement lists, one per side.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidConfiguration`] when the lists are empty
/// or of different lengths, and [`crate::Error::OccupiedCell`] when a
/// coordinate is used twice.
pub fn board_from_placements(x_pieces: &[Coord], o_pieces: &[Coord]) -> crate::Result<Board> {
    if x_pieces.len() != o_pieces.len() {
        return Err(crate::Error::InvalidConfiguration {
            message: format!(
                "both sides must place the same number of pieces (X={}, O={})",
                x_pieces.len(),
                o_pieces.len()
            ),
        });
    }
    validate_piece_count(x_pieces.len())?;

    let mut board = Board::new();
    for &coord in x_pieces {
        board = place_piece(&board, Player::X, coord)?;
    }
    for &coord in o_pieces {
        board = place_piece(&board, Player::O, coord)?;
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn coord(text: &str) -> Coord {
        Coord::parse(text).unwrap()
    }

    #[test]
    fn test_random_board_places_equal_counts() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = random_board(5, &mut rng).unwrap();
        assert_eq!(board.piece_count(Player::X), 5);
        assert_eq!(board.piece_count(Player::O), 5);
    }

    #[test]
    fn test_random_board_is_reproducible_for_a_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(
            random_board(4, &mut a).unwrap(),
            random_board(4, &mut b).unwrap()
        );
    }

    #[test]
    fn test_random_board_rejects_bad_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_board(0, &mut rng).is_err());
        assert!(random_board(25, &mut rng).is_err());
        assert!(random_board(24, &mut rng).is_ok());
    }

    #[test]
    fn test_placement_lists() {
        let board =
            board_from_placements(&[coord("a1"), coord("b2")], &[coord("g7"), coord("f6")])
                .unwrap();
        assert_eq!(board.piece_count(Player::X), 2);
        assert_eq!(board.piece_count(Player::O), 2);

        let err =
            board_from_placements(&[coord("a1")], &[coord("a1")]).unwrap_err();
        assert!(matches!(err, crate::Error::OccupiedCell { .. }));

        let err = board_from_placements(&[coord("a1")], &[]).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_place_piece_does_not_mutate_original() {
        let board = Board::new();
        let placed = place_piece(&board, Player::X, coord("d4")).unwrap();
        assert!(board.is_empty(coord("d4")));
        assert!(!placed.is_empty(coord("d4")));
    }
}
