//! Run scores for position evaluation
//!
//! A run is scored by its length, then discounted by how many of its ends
//! are blocked.

/// Score by contiguous run length
pub struct RunScore;

impl RunScore {
    /// Five or more: already won
    pub const FIVE: i32 = 100_000;
    /// Four: one move from five
    pub const FOUR: i32 = 15_000;
    pub const THREE: i32 = 1_200;
    pub const TWO: i32 = 80;

    /// Largest center bonus, given at the center itself
    pub const CENTER_BONUS: i32 = 16;
}

/// Base score for a run of `len` stones
#[inline]
pub fn run_score(len: i32) -> i32 {
    match len {
        5.. => RunScore::FIVE,
        4 => RunScore::FOUR,
        3 => RunScore::THREE,
        2 => RunScore::TWO,
        _ => 0,
    }
}

/// Discount a run score by its blocked ends (0, 1 or 2).
///
/// Integer division, so small scores round down.
#[inline]
pub fn apply_block_penalty(score: i32, blocked_ends: u8) -> i32 {
    match blocked_ends {
        0 => score,
        1 => score * 2 / 3,
        _ => score / 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_score_hierarchy() {
        assert!(RunScore::FIVE > RunScore::FOUR);
        assert!(RunScore::FOUR > RunScore::THREE);
        assert!(RunScore::THREE > RunScore::TWO);
    }

    #[test]
    fn test_run_score_table() {
        assert_eq!(run_score(1), 0);
        assert_eq!(run_score(2), 80);
        assert_eq!(run_score(3), 1_200);
        assert_eq!(run_score(4), 15_000);
        assert_eq!(run_score(5), 100_000);
        assert_eq!(run_score(7), 100_000);
    }

    #[test]
    fn test_block_penalty() {
        assert_eq!(apply_block_penalty(1_200, 0), 1_200);
        assert_eq!(apply_block_penalty(1_200, 1), 800);
        assert_eq!(apply_block_penalty(1_200, 2), 400);
        assert_eq!(apply_block_penalty(80, 1), 53);
        assert_eq!(apply_block_penalty(80, 2), 26);
    }
}
