//! Renju-style Omok engine
//!
//! A five-in-a-row rule validator and move-selection AI:
//! - Standard 19x19 board
//! - Exactly five in a row wins; six or more does not
//! - Black, the first mover, may not play double-three, double-four or
//!   overline moves
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards and scoped trial moves
//! - [`rules`]: Win detection and forbidden-move classification
//! - [`eval`]: Run-based position evaluation
//! - [`search`]: Candidate generation, tactical tiers and fallbacks
//! - [`engine`]: The AI engine running the search cascade
//! - [`game`]: A game session that validates and commits moves
//! - [`config`]: Engine tuning, loadable from TOML
//!
//! # Quick Start
//!
//! ```
//! use omok::{AIEngine, EngineConfig, Game, Stone};
//!
//! let mut engine = AIEngine::with_config(EngineConfig::default().with_seed(1));
//! let mut game = Game::new();
//!
//! // Black opens at the center, then White answers
//! game.ai_move(&mut engine).unwrap();
//! game.ai_move(&mut engine).unwrap();
//! assert_eq!(game.current_turn(), Stone::Black);
//! ```
//!
//! # Search Priority
//!
//! 1. Immediate winning move
//! 2. Block the opponent's immediate win
//! 3. Make a four
//! 4. Stop the opponent's four
//! 5. Fast heuristic or two-ply maximin

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Pos, Stone, BOARD_SIZE};
pub use config::{ConfigError, EngineConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use game::{AutoMove, Game, MoveError, PlaceOutcome};
pub use rules::{ForbiddenKind, ForbiddenOverlay};
