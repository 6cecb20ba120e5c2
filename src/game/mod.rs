//! Game-level entry points.
//!
//! - `GameManager`: placement requests in notation and degrees, history, state
//! - `SharedGame`: one manager behind a mutex for concurrent hosts

mod manager;
mod shared;

pub use manager::{GameManager, PlacementRecord};
pub use shared::SharedGame;
