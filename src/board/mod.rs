//! The board and its read-only snapshot.
//!
//! - `Board`: owns the grid and enforces placement rules
//! - `BoardSnapshot`: kind and rotation per cell, for presentation

pub mod grid;
pub mod snapshot;

pub use grid::{Board, Neighbors};
pub use snapshot::{BoardSnapshot, CellView};
