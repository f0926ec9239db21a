// Bounded-depth lookahead over safe move sequences.
//
// The search maximizes the heuristic score of the leaf position reachable
// within `depth` plies. Other snakes are held at their snapshot positions
// for every hypothetical ply: this is a single-agent maximization over a
// frozen board, not an adversarial search. Branching is at most 4, so the
// worst case is 4^depth leaf evaluations and plain recursion suffices.

use crate::config::EngineConfig;
use crate::safety::safe_moves;
use crate::score::score;
use crate::types::{Battlesnake, Board, Coord};

/// Best attainable heuristic value starting from `head` with `depth` plies
/// of lookahead remaining.
///
/// A position with no safe continuation evaluates to negative infinity so
/// that certain death loses every maximization it takes part in.
pub fn lookahead_value(
    head: &Coord,
    board: &Board,
    you: &Battlesnake,
    config: &EngineConfig,
    depth: u8,
) -> f64 {
    if depth == 0 {
        return score(head, board, you, config);
    }

    let moves = safe_moves(head, board, you);
    if moves.is_empty() {
        return f64::NEG_INFINITY;
    }

    moves
        .iter()
        .map(|dir| lookahead_value(&dir.apply(head), board, you, config, depth - 1))
        .fold(f64::NEG_INFINITY, f64::max)
}
