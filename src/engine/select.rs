//! Move selection over a built tree
//!
//! The selection procedure is a two-phase deepest-leaf max, not an
//! alternating max/min search: it never minimizes over the opponent's
//! replies. Its observable choices are kept exactly as they are; swapping
//! in a textbook adversarial search would change which moves get played.

use crate::game::Move;

use super::tree::TreeNode;

/// Sentinel for leaves excluded from the max.
const EXCLUDED: i32 = i32::MIN;

/// Maximum score over leaves at the reference depth.
///
/// A leaf deeper than the current reference depth raises the reference to
/// its own depth and contributes its score; a leaf exactly at the reference
/// depth contributes its score; any other leaf contributes the sentinel.
/// Internal nodes fold the maximum over their children left to right,
/// threading the evolving reference depth through the fold, so the first
/// leaf visited seeds the reference and later, deeper leaves can still
/// raise it. Returning `(score, depth)` pairs keeps those visit-order
/// semantics without a shared mutable depth accumulator.
fn deepest_leaf_max(node: &TreeNode, current_depth: u32, ref_depth: u32) -> (i32, u32) {
    if node.is_leaf() {
        return if current_depth > ref_depth {
            (node.score, current_depth)
        } else if current_depth == ref_depth {
            (node.score, ref_depth)
        } else {
            (EXCLUDED, ref_depth)
        };
    }

    let mut best = EXCLUDED;
    let mut depth = ref_depth;
    for child in &node.children {
        let (score, next_depth) = deepest_leaf_max(child, current_depth + 1, depth);
        depth = next_depth;
        best = best.max(score);
    }
    (best, depth)
}

/// Pick the move for the player the tree was built for.
///
/// Phase one runs [`deepest_leaf_max`] over the whole tree to obtain the
/// best leaf score and the reference depth it settled on. Phase two re-runs
/// the same search on each of the root's immediate children in order,
/// seeded one level shallower, and returns the move of the first child
/// whose subtree reproduces the best score. A root without children means
/// the player has no legal move, reported as `None` rather than an error;
/// the caller treats it as the immobilization loss.
///
/// Deterministic for a fixed tree: no randomness, and ties are broken by
/// child order.
pub fn select_move(root: &TreeNode) -> Option<Move> {
    let (best_score, ref_depth) = deepest_leaf_max(root, 0, 0);

    for child in &root.children {
        let (score, _) = deepest_leaf_max(child, 1, ref_depth.saturating_sub(1));
        if score == best_score {
            return child.mv;
        }
    }

    None
}
