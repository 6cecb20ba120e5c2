//! # rail-tiles
//!
//! Placement engine for a tile-laying board game with roads, railways and
//! stations.
//!
//! ## Model
//!
//! - Every tile edge carries a `ConnectionType`: none, highway, railway or
//!   station.
//! - A `TileKind` fixes the unrotated `[North, East, South, West]` edges of a
//!   tile. A `Tile` adds an orientation, turned in 90° steps.
//! - A `Board` is a 7x7 grid. A tile may go on an empty cell when each
//!   occupied neighbor's facing edge matches the tile's edge, with `None`
//!   matching anything.
//! - Placed tiles are permanent.
//!
//! ## Modules
//!
//! - `core`: connection types, orientations, positions, configuration, errors
//! - `tiles`: tile kinds and tile instances
//! - `board`: the grid, placement rules, snapshots
//! - `game`: notation-driven placement requests and a shared handle
//!
//! ## Example
//!
//! ```
//! use rail_tiles::{GameManager, PlacementError, TileKind};
//!
//! let mut game = GameManager::new();
//! game.place_tile(TileKind::HighwayCross, "D4", 0)?;
//!
//! let clash = game.place_tile(TileKind::RailwayCross, "E4", 0);
//! assert!(matches!(clash, Err(PlacementError::ConnectionIncompatible { .. })));
//! # Ok::<(), PlacementError>(())
//! ```

pub mod core;
pub mod tiles;
pub mod board;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    compatible, BoardConfig, ConnectionType, Direction, Orientation, PlacementError, Position,
    BOARD_SIZE,
};

pub use crate::tiles::{Tile, TileKind};

pub use crate::board::{Board, BoardSnapshot, CellView};

pub use crate::game::{GameManager, PlacementRecord, SharedGame};
