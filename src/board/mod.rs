//! Board representation for Omok

pub mod bitboard;
pub mod board;
pub mod trial;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use trial::TrialPlacement;

/// Board size (19x19)
pub const BOARD_SIZE: usize = 19;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 361

/// The four line directions as (row, col) steps.
/// Each is walked in both signs, which covers 8-connectivity once.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Whether forbidden-move restrictions apply to this color.
    ///
    /// Only Black, the first mover, is constrained.
    #[inline]
    pub fn is_constrained(self) -> bool {
        self == Stone::Black
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stone::Empty => "empty",
            Stone::Black => "black",
            Stone::White => "white",
        };
        f.write_str(name)
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    /// Board center, the opening point
    pub const CENTER: Pos = Pos {
        row: (BOARD_SIZE / 2) as u8,
        col: (BOARD_SIZE / 2) as u8,
    };

    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Position `steps` cells away along `(dr, dc)`, or `None` off the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> Option<Pos> {
        let r = i32::from(self.row) + dr * steps;
        let c = i32::from(self.col) + dc * steps;
        if Pos::is_valid(r, c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan(self, other: Pos) -> i32 {
        (i32::from(self.row) - i32::from(other.row)).abs()
            + (i32::from(self.col) - i32::from(other.col)).abs()
    }

    /// Iterate over every cell in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// A committed stone placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
}

impl Move {
    #[inline]
    pub fn new(pos: Pos, stone: Stone) -> Self {
        Self { pos, stone }
    }
}
