//! Candidate move generation
//!
//! Candidates are the empty cells close to existing stones. Far-away cells
//! are never worth considering in a five-in-a-row game.

use crate::board::{Board, Pos, BOARD_SIZE};
use crate::rules::is_forbidden;

/// Default neighborhood half-width
pub const DEFAULT_RADIUS: i32 = 3;

/// Empty cells within a `radius` square of at least one stone, row-major.
///
/// Returns nothing on an empty board. When `constrained` names the
/// constrained player, cells forbidden to it are left out.
pub fn generate_candidates(
    board: &mut Board,
    radius: i32,
    constrained: Option<crate::board::Stone>,
) -> Vec<Pos> {
    if board.is_board_empty() {
        return Vec::new();
    }

    let mut near = [[false; BOARD_SIZE]; BOARD_SIZE];
    for stone in board.occupied().iter_ones() {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if let Some(p) = stone.offset(dr, dc, 1) {
                    near[p.row as usize][p.col as usize] = true;
                }
            }
        }
    }

    let filter = constrained.filter(|s| s.is_constrained());
    let mut moves = Vec::with_capacity(64);
    for pos in Pos::all() {
        if !near[pos.row as usize][pos.col as usize] || !board.is_empty(pos) {
            continue;
        }
        if let Some(stone) = filter {
            if is_forbidden(board, pos, stone) {
                continue;
            }
        }
        moves.push(pos);
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use crate::rules::classify_forbidden;

    #[test]
    fn test_empty_board_has_no_candidates() {
        let mut board = Board::new();
        assert!(generate_candidates(&mut board, DEFAULT_RADIUS, None).is_empty());
    }

    #[test]
    fn test_single_stone_radius() {
        let mut board = Board::new();
        board.place_stone(Pos::CENTER, Stone::Black);
        assert_eq!(generate_candidates(&mut board, 3, None).len(), 48);
        assert_eq!(generate_candidates(&mut board, 1, None).len(), 8);
    }

    #[test]
    fn test_corner_stone_clipped() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::White);
        // 4x4 block minus the stone itself
        assert_eq!(generate_candidates(&mut board, 3, None).len(), 15);
    }

    #[test]
    fn test_never_returns_occupied() {
        let mut board = Board::new();
        for &(r, c) in &[(9, 9), (9, 10), (10, 9), (8, 8), (7, 11)] {
            board.place_stone(Pos::new(r, c), Stone::White);
        }
        let moves = generate_candidates(&mut board, DEFAULT_RADIUS, None);
        assert!(moves.iter().all(|&p| board.is_empty(p)));
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_excludes_forbidden_for_black_only() {
        let mut board = Board::new();
        for &(r, c) in &[(9, 8), (9, 10), (8, 9), (10, 9)] {
            board.place_stone(Pos::new(r, c), Stone::Black);
        }
        let double_three = Pos::new(9, 9);

        let for_black = generate_candidates(&mut board, DEFAULT_RADIUS, Some(Stone::Black));
        assert!(!for_black.contains(&double_three));
        for &p in &for_black {
            assert!(!classify_forbidden(&mut board, p).is_forbidden());
        }

        let for_white = generate_candidates(&mut board, DEFAULT_RADIUS, Some(Stone::White));
        assert!(for_white.contains(&double_three));
        let unfiltered = generate_candidates(&mut board, DEFAULT_RADIUS, None);
        assert!(unfiltered.contains(&double_three));
    }
}
