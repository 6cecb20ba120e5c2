//! Game manager: turns placement requests into board placements.
//!
//! Requests arrive as a tile kind, a cell in notation (`"D4"`) and a rotation
//! in degrees. The manager builds the tile, places it, and records every
//! successful placement in order.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardSnapshot};
use crate::core::{BoardConfig, PlacementError, Position};
use crate::tiles::{Tile, TileKind};

/// A successful placement, as requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Cell the tile went to.
    pub position: Position,
    /// Tile archetype.
    pub kind: TileKind,
    /// Rotation in degrees, normalized into `[0, 360)`.
    pub rotation: i32,
}

/// Owns one board and its placement history.
///
/// ## Example
///
/// ```
/// use rail_tiles::game::GameManager;
/// use rail_tiles::tiles::TileKind;
/// use rail_tiles::core::Position;
///
/// let mut game = GameManager::new();
/// game.place_tile(TileKind::HighwayStraight, "A7", 0).unwrap();
/// game.place_tile(TileKind::HighwayStraight, "B7", 90).unwrap();
///
/// let state = game.board_state();
/// assert_eq!(state.rotations()[0][1], 90);
/// assert_eq!(game.history().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameManager {
    board: Board,
    history: Vector<PlacementRecord>,
}

impl GameManager {
    /// Create a manager with an empty default board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager with an empty board using `config`.
    #[must_use]
    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            board: Board::with_config(config),
            history: Vector::new(),
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Successful placements, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<PlacementRecord> {
        &self.history
    }

    /// Place a tile of `kind` at the cell named by `notation`, turned by
    /// `rotation` degrees.
    ///
    /// `rotation` must be a multiple of 90; negative values turn
    /// counter-clockwise.
    pub fn place_tile(
        &mut self,
        kind: TileKind,
        notation: &str,
        rotation: i32,
    ) -> Result<(), PlacementError> {
        let position = Position::from_notation(notation)?;
        self.place_at(kind, position, rotation)
    }

    /// Place a tile of `kind` at `position`, turned by `rotation` degrees.
    pub fn place_at(
        &mut self,
        kind: TileKind,
        position: Position,
        rotation: i32,
    ) -> Result<(), PlacementError> {
        let tile = Tile::with_rotation(kind, rotation)?;
        self.board.place_tile(position, tile)?;

        self.history.push_back(PlacementRecord {
            position,
            kind,
            rotation: tile.orientation().degrees(),
        });
        Ok(())
    }

    /// Check a request without placing anything.
    pub fn check_tile(
        &self,
        kind: TileKind,
        notation: &str,
        rotation: i32,
    ) -> Result<(), PlacementError> {
        let position = Position::from_notation(notation)?;
        let tile = Tile::with_rotation(kind, rotation)?;
        self.board.check_placement(position, &tile)
    }

    /// Kind and rotation of every cell.
    #[must_use]
    pub fn board_state(&self) -> BoardSnapshot {
        self.board.snapshot()
    }
}
