//! Scoped speculative placement
//!
//! Rule checks and the lookahead both need "place, look, take back". The
//! guard ties the take-back to scope exit so no early return can leak a
//! stone onto the caller's board.

use std::ops::{Deref, DerefMut};

use super::{Board, Pos, Stone};

/// A stone placed for evaluation only. Removed when dropped.
///
/// Derefs to the board, so trials nest:
///
/// ```
/// use omok::{Board, Pos, Stone};
///
/// let mut board = Board::new();
/// {
///     let mut mine = board.trial(Pos::new(9, 9), Stone::Black);
///     let reply = mine.trial(Pos::new(9, 10), Stone::White);
///     assert_eq!(reply.stone_count(), 2);
/// }
/// assert!(board.is_board_empty());
/// ```
#[must_use = "the stone is removed as soon as the guard is dropped"]
pub struct TrialPlacement<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> TrialPlacement<'a> {
    pub fn new(board: &'a mut Board, pos: Pos, stone: Stone) -> Self {
        debug_assert!(board.is_empty(pos), "trial placement on occupied cell {pos}");
        board.place_stone(pos, stone);
        Self { board, pos }
    }

    /// Cell holding the trial stone
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for TrialPlacement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialPlacement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialPlacement<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_reverts_on_drop() {
        let mut board = Board::new();
        board.place_stone(Pos::new(3, 3), Stone::White);
        let before = board.clone();
        {
            let trial = board.trial(Pos::new(9, 9), Stone::Black);
            assert_eq!(trial.get(Pos::new(9, 9)), Stone::Black);
            assert_eq!(trial.pos(), Pos::new(9, 9));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_trial_reverts_on_early_return() {
        fn probe(board: &mut Board) -> bool {
            let trial = board.trial(Pos::new(0, 0), Stone::White);
            if trial.get(Pos::new(0, 0)) == Stone::White {
                return true;
            }
            false
        }

        let mut board = Board::new();
        assert!(probe(&mut board));
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_nested_trials_unwind_in_order() {
        let mut board = Board::new();
        {
            let mut outer = board.trial(Pos::new(9, 9), Stone::Black);
            {
                let inner = outer.trial(Pos::new(9, 10), Stone::White);
                assert_eq!(inner.stone_count(), 2);
            }
            assert_eq!(outer.stone_count(), 1);
            assert_eq!(outer.get(Pos::new(9, 10)), Stone::Empty);
        }
        assert!(board.is_board_empty());
    }
}
