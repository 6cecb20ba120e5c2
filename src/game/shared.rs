//! Thread-safe handle to one game.
//!
//! All access goes through a single mutex, so a placement's check and its
//! write happen without another placement in between.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::BoardSnapshot;
use crate::core::PlacementError;
use crate::tiles::TileKind;

use super::manager::GameManager;

/// Cloneable handle to a [`GameManager`] shared between threads.
///
/// ```
/// use rail_tiles::game::SharedGame;
/// use rail_tiles::tiles::TileKind;
///
/// let game = SharedGame::default();
/// let other = game.clone();
///
/// game.place_tile(TileKind::Overpass, "D4", 0).unwrap();
/// assert!(other.place_tile(TileKind::Overpass, "D4", 0).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<GameManager>>,
}

impl SharedGame {
    /// Wrap a manager.
    #[must_use]
    pub fn new(manager: GameManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameManager> {
        self.inner.lock()
    }

    /// See [`GameManager::place_tile`].
    pub fn place_tile(
        &self,
        kind: TileKind,
        notation: &str,
        rotation: i32,
    ) -> Result<(), PlacementError> {
        self.lock().place_tile(kind, notation, rotation)
    }

    /// See [`GameManager::board_state`].
    #[must_use]
    pub fn board_state(&self) -> BoardSnapshot {
        self.lock().board_state()
    }

    /// Run `f` with exclusive access to the manager.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameManager) -> R) -> R {
        f(&mut self.lock())
    }
}
