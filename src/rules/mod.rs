//! Game rules for Gomoku
//!
//! Legality is just "the cell must be empty", which the board enforces, so
//! the only rule here is five-in-a-row.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, check_win_full, winning_line, WIN_LENGTH};
