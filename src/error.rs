//! Error types for the engine and its configuration

use std::path::PathBuf;

/// Why a move was rejected. The session state is never changed by a
/// rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("cell ({x}, {y}) is already occupied")]
    CellOccupied { x: i32, y: i32 },

    #[error("game has already ended, reset to play again")]
    GameAlreadyEnded,
}

/// Errors that can occur when constructing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("board of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::OutOfBounds { x: -1, y: 3 };
        assert_eq!(err.to_string(), "(-1, 3) is outside the board");

        let err = MoveError::CellOccupied { x: 2, y: 2 };
        assert_eq!(err.to_string(), "cell (2, 2) is already occupied");
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidDimensions { width: 0, height: 7 };
        assert_eq!(
            err.to_string(),
            "board dimensions must be positive (got 0x7)"
        );

        let err = BoardError::TooLarge { width: usize::MAX, height: 2 };
        assert_eq!(err.to_string(), format!("board of {}x2 cells is too large", usize::MAX));
    }

    #[test]
    fn test_config_error_wraps_board_error() {
        let err: ConfigError = BoardError::InvalidDimensions { width: 3, height: 0 }.into();
        assert_eq!(
            err.to_string(),
            "invalid board: board dimensions must be positive (got 3x0)"
        );
    }
}
