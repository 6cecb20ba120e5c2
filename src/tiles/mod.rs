//! Tile archetypes and tile instances.
//!
//! - `TileKind`: the closed set of archetypes and their base geometry
//! - `Tile`: a kind with a current orientation

pub mod kind;
pub mod tile;

pub use kind::TileKind;
pub use tile::Tile;
