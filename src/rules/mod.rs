//! Game rules for Renju-style Omok
//!
//! This module implements the rule set:
//! - Win condition (exactly five in a row)
//! - Forbidden moves for Black (double-three, double-four, overline)

pub mod forbidden;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{
    classify_forbidden, forbidden_overlay, is_forbidden, ForbiddenKind, ForbiddenOverlay,
};
pub use win::{check_win, has_overline, max_run_length, run_length, winning_line};
