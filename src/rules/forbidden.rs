//! Forbidden-move rules for the constrained player (Black)
//!
//! Black may not play a move that creates:
//! - two or more open threes at once (double-three)
//! - two or more fours at once, or a four-four on a single line (double-four)
//! - six or more in a row (overline)
//!
//! Each line through the candidate is scanned outward on both sides into a
//! call-local [`LineScan`], which is then classified as a three, a four, an
//! instantly fatal one-line double four, or nothing. A three or four that
//! could only be completed by making six is not counted, since that
//! completion is itself illegal for Black.

use crate::board::{Board, Pos, Stone, DIRECTIONS, TOTAL_CELLS};

use super::win::has_overline;

/// Forbidden-move classification of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ForbiddenKind {
    #[default]
    None,
    DoubleThree,
    DoubleFour,
    Overline,
}

impl ForbiddenKind {
    #[inline]
    pub fn is_forbidden(self) -> bool {
        self != ForbiddenKind::None
    }
}

impl std::fmt::Display for ForbiddenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ForbiddenKind::None => "none",
            ForbiddenKind::DoubleThree => "double-three",
            ForbiddenKind::DoubleFour => "double-four",
            ForbiddenKind::Overline => "overline",
        };
        f.write_str(name)
    }
}

/// How one side of a line scan terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SideEnd {
    /// Two consecutive empty cells
    Open,
    /// Opponent stone or board edge, after `gap_stones` stones reached across a gap
    Closed { gap_stones: u8 },
}

impl SideEnd {
    const FLAT: SideEnd = SideEnd::Closed { gap_stones: 0 };
    const ONE_GAP: SideEnd = SideEnd::Closed { gap_stones: 1 };
}

/// Result of walking one side of a line away from the candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SideScan {
    /// Own stones found on this side
    stones: u8,
    end: SideEnd,
    /// The cell after the last examined stone is empty
    extensible: bool,
    /// Distance of the farthest own stone, 0 if none
    reach: i32,
}

/// First two internal gaps of a line, as signed offsets from the candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct GapLog {
    first: Option<i32>,
    second: Option<i32>,
}

impl GapLog {
    fn record(self, offset: i32) -> GapLog {
        match (self.first, self.second) {
            (None, _) => GapLog {
                first: Some(offset),
                ..self
            },
            (Some(_), None) => GapLog {
                second: Some(offset),
                ..self
            },
            _ => self,
        }
    }
}

/// What a line through the candidate contributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinePattern {
    Nothing,
    Three,
    Four,
    /// Two fours on the same line (`X_XXX_X`, `XX_XX_XX`)
    DoubleFourInLine,
}

/// Walk one side starting next to `origin`.
///
/// `sign` is +1 or -1. With `gap_spent`, the side may not open with a gap.
fn scan_side(
    board: &Board,
    origin: Pos,
    (dr, dc): (i32, i32),
    sign: i32,
    stone: Stone,
    gap_spent: bool,
    mut gaps: GapLog,
) -> (SideScan, GapLog) {
    let opponent = stone.opponent();
    let mut stones = 0u8;
    let mut gap_stones = 0u8;
    let mut reach = 0;
    let mut prev_empty = false;
    let mut gap_allowed = !gap_spent;
    let mut step = 1;

    let end = loop {
        let cell = origin.offset(dr * sign, dc * sign, step).map(|p| board.get(p));
        match cell {
            None => break SideEnd::Closed { gap_stones },
            Some(s) if s == opponent => break SideEnd::Closed { gap_stones },
            Some(Stone::Empty) => {
                if prev_empty || !gap_allowed {
                    break SideEnd::Open;
                }
                prev_empty = true;
            }
            Some(_) => {
                if prev_empty {
                    gap_stones += 1;
                    gaps = gaps.record(sign * (step - 1));
                }
                prev_empty = false;
                gap_allowed = true;
                stones += 1;
                reach = step;
            }
        }
        step += 1;
    };

    let scan = SideScan {
        stones,
        end,
        extensible: prev_empty || end == SideEnd::Open,
        reach,
    };
    (scan, gaps)
}

/// Scan context for one direction through the candidate
#[derive(Debug, Clone, Copy)]
struct LineScan {
    positive: SideScan,
    negative: SideScan,
    gaps: GapLog,
}

impl LineScan {
    fn run(board: &Board, pos: Pos, dir: (i32, i32), stone: Stone) -> LineScan {
        let (positive, gaps) = scan_side(board, pos, dir, 1, stone, false, GapLog::default());
        let gap_spent = positive.end == SideEnd::ONE_GAP;
        let (negative, gaps) = scan_side(board, pos, dir, -1, stone, gap_spent, gaps);
        LineScan {
            positive,
            negative,
            gaps,
        }
    }

    /// Stones on both sides, excluding the candidate
    #[inline]
    fn side_stones(&self) -> u8 {
        self.positive.stones + self.negative.stones
    }

    /// Own stones at `min + 5` and `max - 5`, the cells that would turn the
    /// five-windows anchored at each extreme into six.
    fn six_probes(&self, board: &Board, pos: Pos, (dr, dc): (i32, i32), stone: Stone) -> (bool, bool) {
        let min = -self.negative.reach;
        let max = self.positive.reach;
        let hot = |offset: i32| pos.offset(dr, dc, offset).is_some_and(|p| board.get(p) == stone);
        (hot(min + 5), hot(max - 5))
    }

    fn three_needs_overline(&self, probes: (bool, bool)) -> bool {
        let (hot_pos, hot_neg) = probes;
        (hot_pos && self.negative.end == SideEnd::FLAT)
            || (hot_neg && self.positive.end == SideEnd::FLAT)
            || (hot_pos && hot_neg)
    }

    fn four_needs_overline(&self, probes: (bool, bool)) -> bool {
        let (hot_pos, hot_neg) = probes;
        let sealed = |side: &SideScan| !side.extensible && side.end == SideEnd::FLAT;
        (hot_pos && sealed(&self.negative))
            || (hot_neg && sealed(&self.positive))
            || (hot_pos && hot_neg)
    }

    fn classify(&self, board: &Board, pos: Pos, dir: (i32, i32), stone: Stone) -> LinePattern {
        let (pos_end, neg_end) = (self.positive.end, self.negative.end);
        match self.side_stones() {
            2 => {
                let both_ext = self.positive.extensible && self.negative.extensible;
                let both_gapped = pos_end == SideEnd::ONE_GAP && neg_end == SideEnd::ONE_GAP;
                if both_ext
                    && !both_gapped
                    && !self.three_needs_overline(self.six_probes(board, pos, dir, stone))
                {
                    return LinePattern::Three;
                }
                LinePattern::Nothing
            }
            3 => {
                if self.four_needs_overline(self.six_probes(board, pos, dir, stone)) {
                    return LinePattern::Nothing;
                }
                let one_gapped = (pos_end == SideEnd::ONE_GAP) != (neg_end == SideEnd::ONE_GAP);
                if one_gapped || self.positive.extensible || self.negative.extensible {
                    LinePattern::Four
                } else {
                    LinePattern::Nothing
                }
            }
            4 | 5 => {
                let (Some(first), Some(second)) = (self.gaps.first, self.gaps.second) else {
                    return LinePattern::Nothing;
                };
                let fatal = if self.side_stones() == 4 {
                    (first - second).abs() == 4
                } else {
                    let (dr, dc) = dir;
                    let own = |offset: i32| {
                        pos.offset(dr, dc, offset).is_some_and(|p| board.get(p) == stone)
                    };
                    own(first + 2) && own(first - 2)
                };
                if fatal {
                    LinePattern::DoubleFourInLine
                } else {
                    LinePattern::Nothing
                }
            }
            _ => LinePattern::Nothing,
        }
    }
}

/// Classify one direction. `stone` must already stand at `pos`.
fn line_pattern(board: &Board, pos: Pos, dir: (i32, i32), stone: Stone) -> LinePattern {
    LineScan::run(board, pos, dir, stone).classify(board, pos, dir, stone)
}

/// Classify a move by `stone` at empty `pos`.
fn classify(board: &mut Board, pos: Pos, stone: Stone) -> ForbiddenKind {
    let placed = board.trial(pos, stone);

    if has_overline(&placed, pos, stone) {
        return ForbiddenKind::Overline;
    }

    let mut threes = 0;
    let mut fours = 0;
    for &dir in &DIRECTIONS {
        match line_pattern(&placed, pos, dir, stone) {
            LinePattern::Three => threes += 1,
            LinePattern::Four => fours += 1,
            LinePattern::DoubleFourInLine => return ForbiddenKind::DoubleFour,
            LinePattern::Nothing => {}
        }
    }

    if threes >= 2 {
        ForbiddenKind::DoubleThree
    } else if fours >= 2 {
        ForbiddenKind::DoubleFour
    } else {
        ForbiddenKind::None
    }
}

/// Classify a Black move at empty `pos`.
///
/// The board is back to its exact prior state when this returns.
pub fn classify_forbidden(board: &mut Board, pos: Pos) -> ForbiddenKind {
    debug_assert!(board.is_empty(pos), "classifying occupied cell {pos}");
    classify(board, pos, Stone::Black)
}

/// Whether `stone` may not play at `pos`. Always false for White.
pub fn is_forbidden(board: &mut Board, pos: Pos, stone: Stone) -> bool {
    stone.is_constrained() && classify_forbidden(board, pos).is_forbidden()
}

/// Forbidden classification for every cell, valid for Black.
///
/// Occupied cells carry [`ForbiddenKind::None`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForbiddenOverlay {
    cells: [ForbiddenKind; TOTAL_CELLS],
}

impl ForbiddenOverlay {
    /// Overlay with nothing forbidden
    pub fn empty() -> Self {
        Self {
            cells: [ForbiddenKind::None; TOTAL_CELLS],
        }
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> ForbiddenKind {
        self.cells[pos.to_index()]
    }

    /// Forbidden cells with their kind, row-major
    pub fn iter_forbidden(&self) -> impl Iterator<Item = (Pos, ForbiddenKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, kind)| kind.is_forbidden())
            .map(|(idx, &kind)| (Pos::from_index(idx), kind))
    }

    pub fn forbidden_count(&self) -> usize {
        self.iter_forbidden().count()
    }
}

impl Default for ForbiddenOverlay {
    fn default() -> Self {
        Self::empty()
    }
}

/// Recompute the overlay for the whole board.
pub fn forbidden_overlay(board: &mut Board) -> ForbiddenOverlay {
    let mut overlay = ForbiddenOverlay::empty();
    for pos in Pos::all() {
        if board.is_empty(pos) {
            overlay.cells[pos.to_index()] = classify_forbidden(board, pos);
        }
    }
    overlay
}
