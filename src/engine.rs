//! Main AI engine tying the search tiers together
//!
//! Move selection follows a strict priority; the first tier that produces a
//! move wins:
//!
//! 1. **Immediate win**: a move completing an exact five
//! 2. **Block**: the cell where the opponent would complete five
//! 3. **Force**: a move giving us a run of four
//! 4. **Defend force**: the cell where the opponent would get a run of four
//! 5. **Fallback**: fast heuristic or two-ply maximin
//!
//! # Example
//!
//! ```
//! use omok::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let mut engine = AIEngine::with_config(EngineConfig::default().with_seed(7));
//! let mut board = Board::new();
//! board.place_stone(Pos::new(9, 9), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&mut board, Stone::White, Stone::Black, false);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::search::{fast_choice, find_tactic, generate_candidates, maximin_choice, FallbackChoice, Tactic};

/// Which tier of the cascade produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// No candidates: opening at the center
    Center,
    ImmediateWin,
    Block,
    Force,
    DefendForce,
    /// Single-ply heuristic fallback
    Fast,
    /// Two-ply maximin fallback
    Maximin,
    /// Uniform random pick when nothing scored
    Random,
}

impl From<Tactic> for SearchType {
    fn from(tactic: Tactic) -> Self {
        match tactic {
            Tactic::Win => SearchType::ImmediateWin,
            Tactic::Block => SearchType::Block,
            Tactic::Force => SearchType::Force,
            Tactic::DefendForce => SearchType::DefendForce,
        }
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the chosen move; meaning depends on `search_type`
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Trial placements evaluated
    pub nodes: u64,
}

impl MoveResult {
    fn tactical(pos: Pos, tactic: Tactic, time_ms: u64, nodes: u64) -> Self {
        let score = match tactic {
            Tactic::Win => 1_000_000,
            Tactic::Block => 900_000,
            Tactic::Force => 500_000,
            Tactic::DefendForce => 400_000,
        };
        Self {
            best_move: Some(pos),
            score,
            search_type: tactic.into(),
            time_ms,
            nodes,
        }
    }

    fn fallback(choice: Option<FallbackChoice>, deep: bool, time_ms: u64, nodes: u64) -> Self {
        let search_type = match choice {
            Some(FallbackChoice { scored: false, .. }) => SearchType::Random,
            _ if deep => SearchType::Maximin,
            _ => SearchType::Fast,
        };
        Self {
            best_move: choice.map(|c| c.pos),
            score: choice.map_or(0, |c| c.score),
            search_type,
            time_ms,
            nodes,
        }
    }
}

/// AI engine for Omok.
///
/// Owns its configuration and the tiebreak RNG. Searches never keep state
/// between calls, so one engine can play both colors.
pub struct AIEngine {
    config: EngineConfig,
    rng: StdRng,
}

impl AIEngine {
    /// Engine with the default config and an entropy-seeded RNG
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Restart the RNG from `seed`, making later moves reproducible.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Choose a move for `me`, or `None` when there is nowhere to play.
    ///
    /// `deep` selects the maximin fallback over the fast one. The board is
    /// only touched through trial placements and is unchanged on return.
    pub fn request_move(&mut self, board: &mut Board, me: Stone, opponent: Stone, deep: bool) -> Option<Pos> {
        self.get_move_with_stats(board, me, opponent, deep).best_move
    }

    /// [`AIEngine::request_move`] for `color` against its opponent, using
    /// the configured fallback.
    pub fn get_move(&mut self, board: &mut Board, color: Stone) -> Option<Pos> {
        let deep = self.config.deep_search;
        self.request_move(board, color, color.opponent(), deep)
    }

    /// Run the full cascade and report how the move was found.
    pub fn get_move_with_stats(&mut self, board: &mut Board, me: Stone, opponent: Stone, deep: bool) -> MoveResult {
        let start = Instant::now();
        let elapsed = || start.elapsed().as_millis() as u64;
        let mut nodes = 0u64;

        let candidates = generate_candidates(board, self.config.search_radius, Some(me));
        if candidates.is_empty() {
            let best_move = board.is_empty(Pos::CENTER).then_some(Pos::CENTER);
            debug!(color = %me, ?best_move, "no candidates, opening at center");
            return MoveResult {
                best_move,
                score: 0,
                search_type: SearchType::Center,
                time_ms: elapsed(),
                nodes,
            };
        }

        if let Some((pos, tactic)) = find_tactic(board, &candidates, me, opponent, &mut nodes) {
            debug!(color = %me, %pos, ?tactic, "tactical move");
            return MoveResult::tactical(pos, tactic, elapsed(), nodes);
        }

        let choice = if deep {
            maximin_choice(
                board,
                &candidates,
                me,
                opponent,
                self.config.maximin_width,
                self.config.search_radius,
                &mut nodes,
                &mut self.rng,
            )
        } else {
            nodes += candidates.len() as u64;
            fast_choice(
                board,
                &candidates,
                me,
                opponent,
                self.config.tiebreak_range,
                &mut self.rng,
            )
        };

        let result = MoveResult::fallback(choice, deep, elapsed(), nodes);
        debug!(
            color = %me,
            best_move = ?result.best_move,
            search_type = ?result.search_type,
            score = result.score,
            nodes,
            "fallback move"
        );
        result
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::classify_forbidden;

    fn seeded() -> AIEngine {
        AIEngine::with_config(EngineConfig::default().with_seed(42))
    }

    #[test]
    fn test_empty_board_plays_center() {
        let mut engine = seeded();
        let mut board = Board::new();
        let result = engine.get_move_with_stats(&mut board, Stone::Black, Stone::White, true);
        assert_eq!(result.best_move, Some(Pos::CENTER));
        assert_eq!(result.search_type, SearchType::Center);
    }

    #[test]
    fn test_immediate_win() {
        let mut engine = seeded();
        let mut board = Board::new();
        for c in 5..9 {
            board.place_stone(Pos::new(9, c), Stone::White);
        }
        board.place_stone(Pos::new(9, 4), Stone::Black);
        // Black also has an open four elsewhere; winning comes first
        for c in 3..7 {
            board.place_stone(Pos::new(3, c), Stone::Black);
        }

        let result = engine.get_move_with_stats(&mut board, Stone::White, Stone::Black, true);
        assert_eq!(result.best_move, Some(Pos::new(9, 9)));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
    }

    #[test]
    fn test_blocks_opponent_four() {
        let mut engine = seeded();
        let mut board = Board::new();
        for r in 5..9 {
            board.place_stone(Pos::new(r, 9), Stone::Black);
        }
        board.place_stone(Pos::new(4, 9), Stone::White);
        board.place_stone(Pos::new(10, 10), Stone::White);

        let result = engine.get_move_with_stats(&mut board, Stone::White, Stone::Black, false);
        assert_eq!(result.best_move, Some(Pos::new(9, 9)));
        assert_eq!(result.search_type, SearchType::Block);
    }

    #[test]
    fn test_force_before_defend() {
        let mut engine = seeded();
        let mut board = Board::new();
        for c in 8..11 {
            board.place_stone(Pos::new(9, c), Stone::White);
            board.place_stone(Pos::new(14, c), Stone::Black);
        }

        let result = engine.get_move_with_stats(&mut board, Stone::White, Stone::Black, true);
        assert_eq!(result.search_type, SearchType::Force);
        assert_eq!(result.best_move.map(|p| p.row), Some(9));
    }

    #[test]
    fn test_board_unchanged_after_search() {
        let mut engine = seeded();
        let mut board = Board::new();
        board.place_stone(Pos::new(9, 9), Stone::Black);
        board.place_stone(Pos::new(9, 10), Stone::White);
        board.place_stone(Pos::new(10, 9), Stone::Black);
        let before = board.clone();

        for deep in [false, true] {
            let result = engine.get_move_with_stats(&mut board, Stone::White, Stone::Black, deep);
            assert!(result.best_move.is_some());
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_fallback_types() {
        let mut engine = seeded();
        let mut board = Board::new();
        board.place_stone(Pos::CENTER, Stone::Black);

        let fast = engine.get_move_with_stats(&mut board, Stone::White, Stone::Black, false);
        assert_eq!(fast.search_type, SearchType::Fast);
        let deep = engine.get_move_with_stats(&mut board, Stone::White, Stone::Black, true);
        assert_eq!(deep.search_type, SearchType::Maximin);
        assert!(deep.nodes > fast.nodes);
    }

    #[test]
    fn test_same_seed_same_moves() {
        let mut board = Board::new();
        board.place_stone(Pos::CENTER, Stone::Black);
        board.place_stone(Pos::new(8, 10), Stone::White);

        let mut a = seeded();
        let mut b = seeded();
        for _ in 0..5 {
            let ma = a.request_move(&mut board, Stone::Black, Stone::White, false);
            let mb = b.request_move(&mut board, Stone::Black, Stone::White, false);
            assert_eq!(ma, mb);
        }

        a.reseed(9);
        b.reseed(9);
        assert_eq!(
            a.request_move(&mut board, Stone::White, Stone::Black, false),
            b.request_move(&mut board, Stone::White, Stone::Black, false)
        );
    }

    #[test]
    fn test_black_never_chooses_forbidden() {
        let mut engine = seeded();
        let mut board = Board::new();
        for &(r, c) in &[(9, 8), (9, 10), (8, 9), (10, 9)] {
            board.place_stone(Pos::new(r, c), Stone::Black);
        }
        for &(r, c) in &[(3, 3), (15, 15), (3, 15), (15, 3)] {
            board.place_stone(Pos::new(r, c), Stone::White);
        }

        for deep in [false, true] {
            let pos = engine.get_move(&mut board, Stone::Black).unwrap();
            assert!(!classify_forbidden(&mut board, pos).is_forbidden());
            let pos = engine.request_move(&mut board, Stone::Black, Stone::White, deep).unwrap();
            assert!(!classify_forbidden(&mut board, pos).is_forbidden());
        }
    }

    #[test]
    fn test_full_center_occupied_no_candidates() {
        let mut engine = AIEngine::with_config(EngineConfig {
            search_radius: 0,
            ..EngineConfig::default().with_seed(1)
        });
        let mut board = Board::new();
        board.place_stone(Pos::CENTER, Stone::Black);
        let result = engine.get_move_with_stats(&mut board, Stone::White, Stone::Black, true);
        assert_eq!(result.best_move, None);
        assert_eq!(result.search_type, SearchType::Center);
    }
}
