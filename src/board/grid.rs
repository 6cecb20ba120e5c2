//! The board: a fixed grid of optional tiles.
//!
//! ## Placement Rules
//!
//! A tile may be placed on a cell when:
//! 1. the cell is on the board,
//! 2. the cell is empty,
//! 3. for every occupied neighbor, the new tile's edge toward it is
//!    [`compatible`] with the neighbor's edge facing back.
//!
//! Neighbors that are empty or off the board impose nothing. Once placed, a
//! tile is never removed or replaced.

use smallvec::SmallVec;

use crate::core::{compatible, BoardConfig, Direction, PlacementError, Position, BOARD_SIZE};
use crate::tiles::Tile;

use super::snapshot::BoardSnapshot;

/// Occupied neighbors of a cell, with the direction from the cell toward each.
pub type Neighbors<'a> = SmallVec<[(Direction, &'a Tile); 4]>;

/// A `BOARD_SIZE` x `BOARD_SIZE` grid of tiles.
///
/// ## Example
///
/// ```
/// use rail_tiles::board::Board;
/// use rail_tiles::core::{PlacementError, Position};
/// use rail_tiles::tiles::{Tile, TileKind};
///
/// let mut board = Board::new();
/// let a7 = Position::new(0, 0);
///
/// board.place_tile(a7, Tile::new(TileKind::HighwayStraight)).unwrap();
/// assert_eq!(
///     board.place_tile(a7, Tile::new(TileKind::RailwayStraight)),
///     Err(PlacementError::CellOccupied(a7))
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Tile>; BOARD_SIZE]; BOARD_SIZE],
    config: BoardConfig,
}

impl Default for Board {
    fn default() -> Self {
        Self::with_config(BoardConfig::default())
    }
}

impl Board {
    /// Create an empty board with the default exits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty board with the given configuration.
    #[must_use]
    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            config,
        }
    }

    /// Board configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Width and height in cells.
    #[must_use]
    pub const fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Grid indices for an on-board position.
    #[inline]
    fn index(pos: Position) -> Option<(usize, usize)> {
        pos.in_bounds().then(|| (pos.row() as usize, pos.col() as usize))
    }

    // === Queries ===

    /// Tile at `pos`, or `None` if the cell is empty or off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        Self::index(pos).and_then(|(r, c)| self.grid[r][c].as_ref())
    }

    /// Tile at `(row, col)`.
    ///
    /// Unlike [`Board::get`], an off-board coordinate is an error rather than
    /// an empty cell.
    pub fn tile_at(&self, row: i32, col: i32) -> Result<Option<&Tile>, PlacementError> {
        let pos = Position::new(row, col);
        let (r, c) = Self::index(pos).ok_or(PlacementError::invalid_position(pos))?;
        Ok(self.grid[r][c].as_ref())
    }

    /// Check if `pos` is on the board and holds a tile.
    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Number of placed tiles.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.grid.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Check if no tile has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    /// Iterate over placed tiles, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Tile)> {
        Position::all().filter_map(move |pos| self.get(pos).map(|tile| (pos, tile)))
    }

    /// Occupied cells around `pos`, in North, East, South, West order.
    ///
    /// Empty for positions off the board.
    #[must_use]
    pub fn occupied_neighbors(&self, pos: Position) -> Neighbors<'_> {
        if !pos.in_bounds() {
            return Neighbors::new();
        }
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.get(pos.step(dir)).map(|tile| (dir, tile)))
            .collect()
    }

    /// Check if `pos` is a configured exit.
    #[must_use]
    pub fn is_exit(&self, pos: Position) -> bool {
        self.config.is_exit(pos)
    }

    /// Iterate over configured exits.
    pub fn exits(&self) -> impl Iterator<Item = Position> + '_ {
        self.config.exits()
    }

    /// Kind and rotation of every cell, for presentation.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_board(self)
    }

    // === Placement ===

    /// Check whether `tile` may be placed at `pos`, reporting the first failure.
    ///
    /// Checks bounds, then occupancy, then each occupied neighbor in North,
    /// East, South, West order.
    pub fn check_placement(&self, pos: Position, tile: &Tile) -> Result<(), PlacementError> {
        let (r, c) = Self::index(pos).ok_or(PlacementError::invalid_position(pos))?;

        if self.grid[r][c].is_some() {
            return Err(PlacementError::CellOccupied(pos));
        }

        for (direction, neighbor) in self.occupied_neighbors(pos) {
            let placed = tile.connection(direction);
            let existing = neighbor.connection(direction.opposite());
            if !compatible(placed, existing) {
                return Err(PlacementError::ConnectionIncompatible {
                    position: pos,
                    direction,
                    placed,
                    existing,
                });
            }
        }

        Ok(())
    }

    /// Check whether `tile` may be placed at `pos`.
    #[must_use]
    pub fn is_valid_placement(&self, pos: Position, tile: &Tile) -> bool {
        self.check_placement(pos, tile).is_ok()
    }

    /// Place `tile` at `pos` if the placement is valid.
    ///
    /// On error the board is left untouched.
    pub fn place_tile(&mut self, pos: Position, tile: Tile) -> Result<(), PlacementError> {
        if let Err(err) = self.check_placement(pos, &tile) {
            tracing::trace!(%pos, kind = %tile.kind(), error = %err, "placement rejected");
            return Err(err);
        }

        // check_placement has already bounds-checked pos
        let (r, c) = (pos.row() as usize, pos.col() as usize);
        self.grid[r][c] = Some(tile);

        tracing::debug!(
            %pos,
            kind = %tile.kind(),
            orientation = %tile.orientation(),
            "tile placed"
        );
        Ok(())
    }
}
