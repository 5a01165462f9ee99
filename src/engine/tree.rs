//! Game tree construction
//!
//! The tree is rebuilt from scratch for every decision and dropped once a
//! move has been extracted; nothing is shared between turns or between
//! branches. Expansion is exhaustive within the ply bound, with no pruning
//! of any kind, so the node count grows as roughly b^depth with a branching
//! factor of up to four moves per mobile piece. Callers control the cost
//! through the ply bound alone.

use crate::game::{Board, Direction, Move, Player};

use super::eval::evaluate;

/// A node of the decision tree.
///
/// Owns a full board snapshot, the move that produced it (`None` at the
/// root), its children in discovery order, and a score computed once at
/// creation. Children are appended during expansion; nothing else is ever
/// mutated.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub board: Board,
    pub mv: Option<Move>,
    pub score: i32,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(board: Board, mv: Option<Move>, score: i32) -> TreeNode {
        TreeNode {
            board,
            mv,
            score,
            children: Vec::new(),
        }
    }

    /// A node with no children: either the ply bound was reached or the
    /// mover at this depth had no legal move.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::node_count)
            .sum::<usize>()
    }

    /// Length of the longest path from this node down to a leaf
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.height())
            .max()
            .unwrap_or(0)
    }
}

/// Build the exhaustive decision tree for `perspective` on `board`.
///
/// `max_depth` is the ply bound. Expansion alternates the mover each ply,
/// starting with `perspective`, and stops early below any position where
/// the mover has no legal move. Every node's score is computed by
/// [`evaluate`] from `perspective`'s point of view, including nodes that
/// represent the opponent's replies; the evaluation perspective never
/// follows the mover. That fixed-perspective scoring is long-standing
/// engine behavior and the selection procedure depends on it.
pub fn build_tree(board: Board, perspective: Player, max_depth: u32) -> TreeNode {
    let mut root = TreeNode::new(board, None, evaluate(&board, perspective));
    expand(&mut root, 0, max_depth, perspective, perspective);
    root
}

fn expand(
    node: &mut TreeNode,
    current_depth: u32,
    max_depth: u32,
    mover: Player,
    perspective: Player,
) {
    if current_depth == max_depth || !node.board.has_any_legal_move(mover) {
        return;
    }

    let board = node.board;
    for from in board.piece_coords(mover) {
        for dir in Direction::ALL {
            let Some(to) = from.step(dir) else {
                continue;
            };
            let mv = Move::new(from, to);
            let Ok(child_board) = board.apply_move(mover, mv) else {
                continue;
            };

            let mut child =
                TreeNode::new(child_board, Some(mv), evaluate(&child_board, perspective));
            expand(
                &mut child,
                current_depth + 1,
                max_depth,
                mover.opponent(),
                perspective,
            );
            node.children.push(child);
        }
    }
}
