//! Evaluation module for Omok positions
//!
//! The evaluation considers:
//! - Contiguous runs through a cell in each direction
//! - Blocked ends (edge or opposing stone)
//! - A center-proximity bonus

pub mod heuristic;
pub mod patterns;

pub use heuristic::{center_bonus, directional_run_score, evaluate_board, evaluate_position};
pub use patterns::{run_score, RunScore};
