//! Win condition checking
//!
//! A win is exactly five in a row. Six or more does not win through this
//! check for either color; for Black it is a forbidden overline anyway.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// Consecutive `stone` cells walking away from `pos` along `(dr, dc)`,
/// not counting `pos` itself.
#[inline]
pub(crate) fn count_consecutive(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> i32 {
    let mut count = 0;
    let mut step = 1;
    while let Some(next) = pos.offset(dr, dc, step) {
        if board.get(next) != stone {
            break;
        }
        count += 1;
        step += 1;
    }
    count
}

/// Length of the contiguous run through `pos` along one direction,
/// counting `pos` as `stone` whatever it currently holds.
#[inline]
pub fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> i32 {
    1 + count_consecutive(board, pos, dr, dc, stone)
        + count_consecutive(board, pos, -dr, -dc, stone)
}

/// Longest run through `pos` over the four directions
pub fn max_run_length(board: &Board, pos: Pos, stone: Stone) -> i32 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| run_length(board, pos, dr, dc, stone))
        .max()
        .unwrap_or(1)
}

/// Check whether `stone` at `pos` completes exactly five in a row.
///
/// `pos` itself is not read, so this also answers "would placing here win".
#[inline]
pub fn check_win(board: &Board, pos: Pos, stone: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| run_length(board, pos, dr, dc, stone) == 5)
}

/// Whether `stone` at `pos` sits in a run of six or more
#[inline]
pub fn has_overline(board: &Board, pos: Pos, stone: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| run_length(board, pos, dr, dc, stone) >= 6)
}

/// The five cells of the exact-five line through `pos`, in board order
pub fn winning_line(board: &Board, pos: Pos, stone: Stone) -> Option<[Pos; 5]> {
    for &(dr, dc) in &DIRECTIONS {
        if run_length(board, pos, dr, dc, stone) != 5 {
            continue;
        }
        let back = count_consecutive(board, pos, -dr, -dc, stone);
        let start = pos.offset(-dr, -dc, back)?;
        let mut line = [start; 5];
        for (i, cell) in line.iter_mut().enumerate().skip(1) {
            *cell = start.offset(dr, dc, i as i32)?;
        }
        return Some(line);
    }
    None
}
