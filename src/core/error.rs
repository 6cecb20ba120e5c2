//! Placement failures.
//!
//! Every failure here is an expected, recoverable outcome reported to the
//! immediate caller. Nothing is retried.

use thiserror::Error;

use super::connection::ConnectionType;
use super::position::{Direction, Position};

/// Why a tile could not be placed (or a placement request could not be built).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The position lies outside the board.
    #[error("position ({row}, {col}) is outside the board")]
    InvalidPosition {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// The target cell already holds a tile.
    #[error("cell {0} is already occupied")]
    CellOccupied(Position),

    /// An occupied neighbor's facing edge does not match the new tile.
    #[error(
        "{placed} edge facing {direction} at {position} does not connect to neighboring {existing} edge"
    )]
    ConnectionIncompatible {
        /// Cell the tile was being placed on.
        position: Position,
        /// Direction from the new tile toward the clashing neighbor.
        direction: Direction,
        /// The new tile's edge toward the neighbor.
        placed: ConnectionType,
        /// The neighbor's edge facing back.
        existing: ConnectionType,
    },

    /// Rotation angle is not a multiple of 90 degrees.
    #[error("rotation of {0} degrees is not a multiple of 90")]
    UnsupportedRotation(i32),

    /// Text is not valid cell notation.
    #[error("invalid cell notation {0:?}")]
    InvalidNotation(String),

    /// Text does not name a tile kind.
    #[error("unknown tile kind {0:?}")]
    UnknownTileKind(String),
}

impl PlacementError {
    /// Error for an off-board position.
    #[must_use]
    pub const fn invalid_position(pos: Position) -> Self {
        PlacementError::InvalidPosition {
            row: pos.row(),
            col: pos.col(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = PlacementError::invalid_position(Position::new(7, -1));
        assert_eq!(err.to_string(), "position (7, -1) is outside the board");

        let err = PlacementError::CellOccupied(Position::new(0, 0));
        assert_eq!(err.to_string(), "cell A7 is already occupied");

        let err = PlacementError::ConnectionIncompatible {
            position: Position::new(0, 1),
            direction: Direction::West,
            placed: ConnectionType::Railway,
            existing: ConnectionType::Highway,
        };
        assert_eq!(
            err.to_string(),
            "railway edge facing west at B7 does not connect to neighboring highway edge"
        );
    }
}
