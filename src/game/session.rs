//! High-level game management: turn budget, win conditions, final scoring

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::board::{Board, Move, Player};
use super::reachable::unique_reachable_cells;

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A live game: the board plus the per-player turn budget and counters.
///
/// The session owns the only mutable board; the decision engine works on
/// copies and never touches it. Win conditions: a player with no legal move
/// on their turn loses immediately; once both budgets are spent, the side
/// with the larger unique reachable-cell count wins, equal counts drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn_budget: u32,
    turns_taken: [u32; 2],
}

impl Game {
    /// Start a game on `board` with a per-player `turn_budget`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] for a zero budget or
    /// when the sides do not start with the same non-zero piece count.
    pub fn new(board: Board, turn_budget: u32) -> crate::Result<Game> {
        if turn_budget == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "turn budget must be at least 1".to_string(),
            });
        }

        let x_pieces = board.piece_count(Player::X);
        let o_pieces = board.piece_count(Player::O);
        if x_pieces == 0 || x_pieces != o_pieces {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "both sides must start with the same non-zero piece count (X={x_pieces}, O={o_pieces})"
                ),
            });
        }

        Ok(Game {
            board,
            turn_budget,
            turns_taken: [0, 0],
        })
    }

    /// The live board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The configured per-player turn budget
    pub fn turn_budget(&self) -> u32 {
        self.turn_budget
    }

    /// Turns `player` has taken so far
    pub fn turns_taken(&self, player: Player) -> u32 {
        self.turns_taken[player.index()]
    }

    /// Turns `player` still has in the budget; drives the engine's ply bound.
    pub fn turns_remaining(&self, player: Player) -> u32 {
        self.turn_budget.saturating_sub(self.turns_taken(player))
    }

    /// True once both players have spent their full budget
    pub fn budget_exhausted(&self) -> bool {
        self.turns_taken
            .iter()
            .all(|&taken| taken >= self.turn_budget)
    }

    /// True when `player` has no legal move; on their turn this is an
    /// immediate loss.
    pub fn is_immobilized(&self, player: Player) -> bool {
        !self.board.has_any_legal_move(player)
    }

    /// Validate and apply a move to the live board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] when `player` has no budget left,
    /// or [`crate::Error::IllegalMove`] without changing anything when the
    /// move is not legal.
    pub fn play_move(&mut self, player: Player, mv: Move) -> crate::Result<()> {
        if self.turns_remaining(player) == 0 {
            return Err(crate::Error::GameOver);
        }

        self.board = self.board.apply_move(player, mv)?;
        self.turns_taken[player.index()] += 1;
        Ok(())
    }

    /// Unique reachable-cell counts as `(x, o)`
    pub fn final_score(&self) -> (usize, usize) {
        (
            unique_reachable_cells(&self.board, Player::X).len(),
            unique_reachable_cells(&self.board, Player::O).len(),
        )
    }

    /// Outcome by reachable-cell count, used when the budget runs out
    pub fn outcome(&self) -> GameOutcome {
        let (x, o) = self.final_score();
        match x.cmp(&o) {
            Ordering::Greater => GameOutcome::Win(Player::X),
            Ordering::Less => GameOutcome::Win(Player::O),
            Ordering::Equal => GameOutcome::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Cell;
    use crate::game::coord::Coord;

    fn coord(text: &str) -> Coord {
        Coord::parse(text).unwrap()
    }

    fn two_piece_board() -> Board {
        let mut board = Board::new();
        board.set(coord("a1"), Cell::X);
        board.set(coord("g7"), Cell::O);
        board
    }

    #[test]
    fn test_new_validates_configuration() {
        assert!(Game::new(two_piece_board(), 0).is_err());
        assert!(Game::new(Board::new(), 3).is_err());

        let mut lopsided = two_piece_board();
        lopsided.set(coord("d4"), Cell::X);
        assert!(Game::new(lopsided, 3).is_err());

        assert!(Game::new(two_piece_board(), 3).is_ok());
    }

    #[test]
    fn test_play_move_updates_counters() {
        let mut game = Game::new(two_piece_board(), 2).unwrap();
        assert_eq!(game.turns_remaining(Player::X), 2);

        game.play_move(Player::X, Move::new(coord("a1"), coord("a2")))
            .unwrap();
        assert_eq!(game.turns_taken(Player::X), 1);
        assert_eq!(game.turns_taken(Player::O), 0);
        assert_eq!(game.turns_remaining(Player::X), 1);
        assert!(!game.budget_exhausted());
    }

    #[test]
    fn test_illegal_move_leaves_state_unchanged() {
        let mut game = Game::new(two_piece_board(), 2).unwrap();
        let before = *game.board();

        let err = game
            .play_move(Player::X, Move::new(coord("a1"), coord("c1")))
            .unwrap_err();
        assert!(matches!(err, crate::Error::IllegalMove { .. }));
        assert_eq!(game.board(), &before);
        assert_eq!(game.turns_taken(Player::X), 0);
    }

    #[test]
    fn test_budget_enforced_per_player() {
        let mut game = Game::new(two_piece_board(), 1).unwrap();
        game.play_move(Player::X, Move::new(coord("a1"), coord("a2")))
            .unwrap();

        let err = game
            .play_move(Player::X, Move::new(coord("a2"), coord("a1")))
            .unwrap_err();
        assert!(matches!(err, crate::Error::GameOver));

        // O still has budget
        game.play_move(Player::O, Move::new(coord("g7"), coord("g6")))
            .unwrap();
        assert!(game.budget_exhausted());
    }

    #[test]
    fn test_immobilization_detection() {
        // Four X pieces boxed into the corner by four O pieces
        let board = Board::from_string(concat!(
            "XXO....", //
            "XXO....", //
            "OO.....", //
            ".......", //
            ".......", //
            ".......", //
            ".......",
        ))
        .unwrap();

        let game = Game::new(board, 3).unwrap();
        assert!(game.is_immobilized(Player::X));
        assert!(!game.is_immobilized(Player::O));
    }

    #[test]
    fn test_outcome_by_reachable_count() {
        // X in the open center, O walled toward the corner
        let mut board = Board::new();
        board.set(coord("d4"), Cell::X);
        board.set(coord("a1"), Cell::O);
        let game = Game::new(board, 1).unwrap();

        assert_eq!(game.final_score(), (4, 2));
        assert_eq!(game.outcome(), GameOutcome::Win(Player::X));
    }

    #[test]
    fn test_outcome_draw_on_equal_counts() {
        let mut board = Board::new();
        board.set(coord("a1"), Cell::X);
        board.set(coord("g7"), Cell::O);
        let game = Game::new(board, 1).unwrap();

        assert_eq!(game.final_score(), (2, 2));
        assert_eq!(game.outcome(), GameOutcome::Draw);
    }
}
