//! Heuristic evaluation of cells and boards
//!
//! Cells are scored per player by the runs they sit in, plus a small bias
//! toward the center. Board scores sum the cell scores of every stone and
//! are only used to compare positions one ply apart.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

use super::patterns::{apply_block_penalty, run_score, RunScore};

/// Score the run of `player` through `pos` along `(dr, dc)`.
///
/// `pos` counts as `player`'s stone. An end is blocked by the board edge or
/// by any stone that is not `player`'s.
#[must_use]
pub fn directional_run_score(board: &Board, pos: Pos, player: Stone, dr: i32, dc: i32) -> i32 {
    let mut len = 1;
    let mut blocked = 0u8;

    for sign in [1, -1] {
        let mut step = 1;
        loop {
            match pos.offset(dr * sign, dc * sign, step) {
                Some(next) if board.get(next) == player => {
                    len += 1;
                    step += 1;
                }
                Some(next) if board.get(next) == Stone::Empty => break,
                _ => {
                    blocked += 1;
                    break;
                }
            }
        }
    }

    apply_block_penalty(run_score(len), blocked)
}

/// Bonus for proximity to the center, independent of stones
#[inline]
#[must_use]
pub fn center_bonus(pos: Pos) -> i32 {
    (RunScore::CENTER_BONUS - pos.manhattan(Pos::CENTER)).max(0)
}

/// Strategic value of `pos` for `player`
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, player: Stone) -> i32 {
    let runs: i32 = DIRECTIONS
        .iter()
        .map(|&(dr, dc)| directional_run_score(board, pos, player, dr, dc))
        .sum();
    runs + center_bonus(pos)
}

/// Whole-board score from `me`'s point of view.
///
/// `me`'s stones add their position value, `opponent`'s subtract theirs.
#[must_use]
pub fn evaluate_board(board: &Board, me: Stone, opponent: Stone) -> i32 {
    let side = |color: Stone| -> i32 {
        board.stones(color).map_or(0, |stones| {
            stones
                .iter_ones()
                .map(|pos| evaluate_position(board, pos, color))
                .sum()
        })
    };
    side(me) - side(opponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_bonus() {
        assert_eq!(center_bonus(Pos::CENTER), 16);
        assert_eq!(center_bonus(Pos::new(9, 12)), 13);
        assert_eq!(center_bonus(Pos::new(0, 0)), 0);
    }

    #[test]
    fn test_empty_board_position_is_center_bonus() {
        let board = Board::new();
        assert_eq!(evaluate_position(&board, Pos::CENTER, Stone::Black), 16);
    }

    #[test]
    fn test_open_three_full_score() {
        let mut board = Board::new();
        board.place_stone(Pos::new(9, 8), Stone::Black);
        board.place_stone(Pos::new(9, 10), Stone::Black);
        assert_eq!(
            directional_run_score(&board, Pos::new(9, 9), Stone::Black, 0, 1),
            1_200
        );
    }

    #[test]
    fn test_one_end_blocked() {
        let mut board = Board::new();
        board.place_stone(Pos::new(9, 7), Stone::White);
        board.place_stone(Pos::new(9, 8), Stone::Black);
        board.place_stone(Pos::new(9, 10), Stone::Black);
        assert_eq!(
            directional_run_score(&board, Pos::new(9, 9), Stone::Black, 0, 1),
            800
        );
    }

    #[test]
    fn test_both_ends_blocked_by_edge_and_stone() {
        let mut board = Board::new();
        // |B B B W
        board.place_stone(Pos::new(0, 0), Stone::Black);
        board.place_stone(Pos::new(0, 2), Stone::Black);
        board.place_stone(Pos::new(0, 3), Stone::White);
        assert_eq!(
            directional_run_score(&board, Pos::new(0, 1), Stone::Black, 0, 1),
            400
        );
    }

    #[test]
    fn test_lone_stone_scores_zero_runs() {
        let board = Board::new();
        for &(dr, dc) in &DIRECTIONS {
            assert_eq!(directional_run_score(&board, Pos::CENTER, Stone::White, dr, dc), 0);
        }
    }

    #[test]
    fn test_evaluate_board_signs() {
        let mut board = Board::new();
        board.place_stone(Pos::new(9, 9), Stone::Black);
        board.place_stone(Pos::new(9, 10), Stone::Black);
        board.place_stone(Pos::new(0, 0), Stone::White);

        let black_view = evaluate_board(&board, Stone::Black, Stone::White);
        let white_view = evaluate_board(&board, Stone::White, Stone::Black);
        assert!(black_view > 0);
        assert_eq!(black_view, -white_view);
    }

    #[test]
    fn test_evaluate_board_empty() {
        let board = Board::new();
        assert_eq!(evaluate_board(&board, Stone::Black, Stone::White), 0);
    }
}
