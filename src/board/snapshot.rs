//! Presentation-facing view of the board.
//!
//! A snapshot exposes, per cell, the tile kind and its rotation in degrees.
//! Connection arrays stay internal.

use serde::{Deserialize, Serialize};

use crate::core::{Position, BOARD_SIZE};
use crate::tiles::TileKind;

use super::grid::Board;

/// What a renderer needs to draw one occupied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellView {
    /// Tile archetype.
    pub kind: TileKind,
    /// Clockwise rotation in degrees: 0, 90, 180 or 270.
    pub rotation: i32,
}

/// Copy of the board's occupancy at one moment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Row-major cells, row 0 at the top.
    pub cells: [[Option<CellView>; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardSnapshot {
    /// Capture the current state of `board`.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (pos, tile) in board.iter() {
            cells[pos.row() as usize][pos.col() as usize] = Some(CellView {
                kind: tile.kind(),
                rotation: tile.orientation().degrees(),
            });
        }
        Self { cells }
    }

    /// View of the cell at `pos`, `None` if empty or off the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<CellView> {
        if !pos.in_bounds() {
            return None;
        }
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Tile kinds per cell.
    #[must_use]
    pub fn kinds(&self) -> [[Option<TileKind>; BOARD_SIZE]; BOARD_SIZE] {
        self.cells.map(|row| row.map(|cell| cell.map(|view| view.kind)))
    }

    /// Rotations per cell in degrees; empty cells read as 0.
    #[must_use]
    pub fn rotations(&self) -> [[i32; BOARD_SIZE]; BOARD_SIZE] {
        self.cells.map(|row| row.map(|cell| cell.map_or(0, |view| view.rotation)))
    }
}
