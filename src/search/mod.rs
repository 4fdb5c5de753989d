//! Move search for the Omok AI
//!
//! Contains:
//! - Candidate generation near existing stones
//! - Single-ply tactical tiers (win, block, force, defend)
//! - Fast and maximin fallbacks for quiet positions

pub mod fallback;
pub mod movegen;
pub mod threat;

pub use fallback::{fast_choice, maximin_choice, random_choice, FallbackChoice};
pub use movegen::{generate_candidates, DEFAULT_RADIUS};
pub use threat::{find_tactic, Tactic};
