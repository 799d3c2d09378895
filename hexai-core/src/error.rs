//! Errors returned to callers of the game core

use crate::board::Coord;

/// Errors from board construction and move application
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board size {0} (expected at least 1)")]
    InvalidSize(usize),

    #[error("cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfRange { row: usize, col: usize, size: usize },

    #[error("cell {0} is already occupied")]
    CellOccupied(Coord),

    #[error("no vacant cells left on the board")]
    NoVacantCells,

    #[error("invalid cell notation '{0}' (expected e.g. B3)")]
    InvalidNotation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            GameError::InvalidSize(0).to_string(),
            "invalid board size 0 (expected at least 1)"
        );
        assert_eq!(
            GameError::OutOfRange { row: 3, col: 0, size: 3 }.to_string(),
            "cell (3, 0) is outside a 3x3 board"
        );
        assert_eq!(
            GameError::CellOccupied(Coord::new(1, 2)).to_string(),
            "cell B3 is already occupied"
        );
        assert_eq!(
            GameError::InvalidNotation("??".to_string()).to_string(),
            "invalid cell notation '??' (expected e.g. B3)"
        );
    }
}
