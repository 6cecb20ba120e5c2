//! Core value types: connections, orientations, positions, configuration, errors.
//!
//! Everything in this module is plain data with no I/O. Tiles and boards are
//! built on top of these types.

pub mod connection;
pub mod orientation;
pub mod position;
pub mod config;
pub mod error;

pub use connection::{compatible, ConnectionType};
pub use orientation::Orientation;
pub use position::{Direction, Position, BOARD_SIZE};
pub use config::{BoardConfig, DEFAULT_EXITS};
pub use error::PlacementError;
