//! Positional fallbacks for quiet positions
//!
//! When no tactical tier applies, the move comes from one of two searches:
//! - Fast: a single-ply heuristic weighting defence over attack, with a small
//!   random tiebreak
//! - Maximin: a two-ply lookahead over the best-ranked candidates that picks
//!   the move whose worst opponent reply leaves the best board

use std::cmp::Reverse;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate_board, evaluate_position};

use super::movegen::generate_candidates;

/// Attack weight in the fast score
const ATTACK_WEIGHT: i32 = 2;
/// Defence weight in the fast score
const DEFENCE_WEIGHT: i32 = 3;

/// Outcome of a fallback search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackChoice {
    pub pos: Pos,
    pub score: i32,
    /// False when the pick came from the uniform random rescue
    pub scored: bool,
}

/// Pick uniformly among the candidates.
pub fn random_choice<R: Rng + ?Sized>(candidates: &[Pos], rng: &mut R) -> Option<FallbackChoice> {
    candidates.choose(rng).map(|&pos| FallbackChoice {
        pos,
        score: i32::MIN,
        scored: false,
    })
}

/// Single-ply pick: `2 * attack + 3 * defence + tiebreak`.
///
/// The tiebreak is drawn from `0..tiebreak_range`; a non-positive range
/// disables it. The first candidate wins exact ties.
pub fn fast_choice<R: Rng + ?Sized>(
    board: &Board,
    candidates: &[Pos],
    me: Stone,
    opponent: Stone,
    tiebreak_range: i32,
    rng: &mut R,
) -> Option<FallbackChoice> {
    let mut best: Option<FallbackChoice> = None;
    let mut best_score = i32::MIN;

    for &pos in candidates {
        let attack = evaluate_position(board, pos, me);
        let defence = evaluate_position(board, pos, opponent);
        let noise = if tiebreak_range > 0 {
            rng.gen_range(0..tiebreak_range)
        } else {
            0
        };
        let score = ATTACK_WEIGHT * attack + DEFENCE_WEIGHT * defence + noise;
        if score > best_score {
            best_score = score;
            best = Some(FallbackChoice {
                pos,
                score,
                scored: true,
            });
        }
    }

    best.or_else(|| random_choice(candidates, rng))
}

/// Candidates ranked by `attack + defence`, best first.
///
/// The sort is stable, so equal scores keep their row-major order.
pub fn rank_candidates(board: &Board, candidates: &[Pos], me: Stone, opponent: Stone) -> Vec<(Pos, i32)> {
    let mut ranked: Vec<(Pos, i32)> = candidates
        .iter()
        .map(|&pos| {
            let score = evaluate_position(board, pos, me) + evaluate_position(board, pos, opponent);
            (pos, score)
        })
        .collect();
    ranked.sort_by_key(|&(_, score)| Reverse(score));
    ranked
}

/// Worst board score for `me` over every opponent reply to `pos`.
///
/// With no legal reply the board after `pos` alone is scored.
pub fn worst_case(
    board: &mut Board,
    pos: Pos,
    me: Stone,
    opponent: Stone,
    radius: i32,
    nodes: &mut u64,
) -> i32 {
    let mut after = board.trial(pos, me);
    let replies = generate_candidates(&mut after, radius, Some(opponent));
    *nodes += 1;

    if replies.is_empty() {
        return evaluate_board(&after, me, opponent);
    }

    let mut worst = i32::MAX;
    for reply in replies {
        *nodes += 1;
        let answered = after.trial(reply, opponent);
        worst = worst.min(evaluate_board(&answered, me, opponent));
    }
    worst
}

/// Two-ply maximin over the top `width` ranked candidates.
///
/// Ties go to the higher-ranked candidate. Falls back to a random
/// candidate if nothing scores above `i32::MIN`.
#[allow(clippy::too_many_arguments)]
pub fn maximin_choice<R: Rng + ?Sized>(
    board: &mut Board,
    candidates: &[Pos],
    me: Stone,
    opponent: Stone,
    width: usize,
    radius: i32,
    nodes: &mut u64,
    rng: &mut R,
) -> Option<FallbackChoice> {
    let ranked = rank_candidates(board, candidates, me, opponent);

    let mut best: Option<FallbackChoice> = None;
    let mut best_score = i32::MIN;

    for &(pos, rank_score) in ranked.iter().take(width) {
        let worst = worst_case(board, pos, me, opponent, radius, nodes);
        trace!(%pos, rank_score, worst, "maximin candidate");
        if worst > best_score {
            best_score = worst;
            best = Some(FallbackChoice {
                pos,
                score: worst,
                scored: true,
            });
        }
    }

    best.or_else(|| random_choice(candidates, rng))
}
