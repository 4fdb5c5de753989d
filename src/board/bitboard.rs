//! Bitboard storage for one stone color

use super::{Pos, TOTAL_CELLS};

/// Words needed to cover every cell (6 * 64 = 384 >= 361)
const WORDS: usize = TOTAL_CELLS.div_ceil(64);

/// One bit per cell, set where the color has a stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

impl Bitboard {
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    #[inline]
    fn locate(pos: Pos) -> (usize, u64) {
        let idx = pos.to_index();
        (idx / 64, 1u64 << (idx % 64))
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let (word, mask) = Self::locate(pos);
        self.bits[word] |= mask;
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let (word, mask) = Self::locate(pos);
        self.bits[word] &= !mask;
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let (word, mask) = Self::locate(pos);
        self.bits[word] & mask != 0
    }

    /// Popcount
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Cells set in either board
    #[inline]
    pub fn union(&self, other: &Bitboard) -> Bitboard {
        let mut bits = self.bits;
        for (word, theirs) in bits.iter_mut().zip(other.bits.iter()) {
            *word |= theirs;
        }
        Bitboard { bits }
    }

    /// Set positions in ascending index order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            bits: self.bits,
            word_idx: 0,
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: [u64; WORDS],
    word_idx: usize,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < WORDS {
            let word = &mut self.bits[self.word_idx];
            if *word == 0 {
                self.word_idx += 1;
                continue;
            }
            let idx = self.word_idx * 64 + word.trailing_zeros() as usize;
            *word &= *word - 1;
            // Padding bits past the last cell are never set
            debug_assert!(idx < TOTAL_CELLS);
            return Some(Pos::from_index(idx));
        }
        None
    }
}
