//! Five-in-a-row rule engine
//!
//! Board state and win detection for a two-player game on a rectangular
//! grid of any size:
//! - Players alternate placing markers on empty cells
//! - Five consecutive cells in a row, column or diagonal win
//! - After a win, moves are rejected until the session is reset
//!
//! # Architecture
//!
//! - [`board`]: Flat grid of cell ownership
//! - [`rules`]: Win detection anchored on the last move
//! - [`session`]: Turn order and game-over state machine
//! - [`config`]: TOML configuration
//! - [`ui`]: egui front-end that drives a session
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameSession, MoveOutcome, Player};
//!
//! let mut session = GameSession::new(10, 10).unwrap();
//! assert_eq!(session.submit_move(4, 4), MoveOutcome::Placed(Player::One));
//! assert_eq!(session.current_turn(), Player::Two);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos};
pub use config::GameConfig;
pub use error::{BoardError, ConfigError, MoveError};
pub use rules::{check_win, Axis, WinResult, WIN_LENGTH};
pub use session::{GameSession, GameStatus, MoveOutcome, ResetEvent};
