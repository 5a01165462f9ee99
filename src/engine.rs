//! Decision engine: exhaustive tree search with a fixed-perspective evaluator
//!
//! One decision runs entirely inside [`choose_move`]: build the whole tree
//! for the current board, walk it once to pick a move, drop the tree. The
//! engine is single-threaded and synchronous; recursion depth equals the
//! ply bound, so callers keep turn budgets modest.

pub mod eval;
pub mod select;
pub mod tree;

pub use eval::evaluate;
pub use select::select_move;
pub use tree::{build_tree, TreeNode};

use crate::game::{Board, Move, Player};

/// Choose a move for `player` with `turns_remaining` in their budget.
///
/// The ply bound is twice the remaining turns, so both sides look ahead the
/// same number of turns. Returns `None` when `player` has no legal move;
/// the caller treats that as the immobilization loss, never as an internal
/// error. The tree is freshly built and owned by this call, and released
/// when it returns.
pub fn choose_move(board: &Board, player: Player, turns_remaining: u32) -> Option<Move> {
    let root = build_tree(*board, player, turns_remaining.saturating_mul(2));
    select_move(&root)
}
