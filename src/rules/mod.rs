//! Game rules for five-in-a-row
//!
//! Placement legality lives on [`Board`](crate::board::Board); this module
//! decides whether a placed stone ends the game.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, Axis, WinResult, WIN_LENGTH};
