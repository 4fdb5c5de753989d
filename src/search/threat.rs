//! Tactical move detection
//!
//! The four immediate tiers of move selection, each a single-ply probe over
//! the candidate list:
//! - Win: a move that completes an exact five for the mover
//! - Block: a cell where the opponent would complete an exact five
//! - Force: a move that gives the mover a run of four or more
//! - DefendForce: a cell where the opponent would get a run of four or more
//!
//! Every probe is a trial placement, so the board is unchanged on return.

use crate::board::{Board, Pos, Stone};
use crate::rules::{check_win, max_run_length};

/// Run length that counts as a forcing threat
pub const FORCE_RUN: i32 = 4;

/// Which tactical tier matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tactic {
    Win,
    Block,
    Force,
    DefendForce,
}

/// First candidate where `stone` would complete an exact five.
pub fn find_five(board: &mut Board, candidates: &[Pos], stone: Stone, nodes: &mut u64) -> Option<Pos> {
    candidates.iter().copied().find(|&pos| {
        *nodes += 1;
        let trial = board.trial(pos, stone);
        check_win(&trial, pos, stone)
    })
}

/// First candidate where `stone` would hold a run of at least [`FORCE_RUN`].
pub fn find_four(board: &mut Board, candidates: &[Pos], stone: Stone, nodes: &mut u64) -> Option<Pos> {
    candidates.iter().copied().find(|&pos| {
        *nodes += 1;
        let trial = board.trial(pos, stone);
        max_run_length(&trial, pos, stone) >= FORCE_RUN
    })
}

/// Run the tiers in priority order and return the first hit.
pub fn find_tactic(
    board: &mut Board,
    candidates: &[Pos],
    me: Stone,
    opponent: Stone,
    nodes: &mut u64,
) -> Option<(Pos, Tactic)> {
    if let Some(pos) = find_five(board, candidates, me, nodes) {
        return Some((pos, Tactic::Win));
    }
    if let Some(pos) = find_five(board, candidates, opponent, nodes) {
        return Some((pos, Tactic::Block));
    }
    if let Some(pos) = find_four(board, candidates, me, nodes) {
        return Some((pos, Tactic::Force));
    }
    find_four(board, candidates, opponent, nodes).map(|pos| (pos, Tactic::DefendForce))
}
