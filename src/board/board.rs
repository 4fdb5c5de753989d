//! Board structure

use super::bitboard::Bitboard;
use super::trial::TrialPlacement;
use super::{Pos, Stone, BOARD_SIZE};

/// Game board: one bitboard per color.
///
/// Equality is bit-for-bit, which is what trial placements must preserve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Stone at signed coordinates, `None` off the board
    #[inline]
    pub fn stone_at(&self, row: i32, col: i32) -> Option<Stone> {
        if Pos::is_valid(row, col) {
            Some(self.get(Pos::new(row as u8, col as u8)))
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone. Placing `Empty` is a no-op.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Speculatively place `stone` at `pos` until the guard is dropped.
    ///
    /// `pos` must be empty.
    #[inline]
    pub fn trial(&mut self, pos: Pos, stone: Stone) -> TrialPlacement<'_> {
        TrialPlacement::new(self, pos, stone)
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Every occupied cell
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(&self.white)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Check if every cell is taken
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == BOARD_SIZE * BOARD_SIZE
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, "{c:2}")?;
        }
        writeln!(f)?;
        for r in 0..BOARD_SIZE {
            write!(f, "{r:2} ")?;
            for c in 0..BOARD_SIZE {
                #[allow(clippy::cast_possible_truncation)]
                let ch = match self.get(Pos::new(r as u8, c as u8)) {
                    Stone::Black => " X",
                    Stone::White => " O",
                    Stone::Empty => " .",
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
