//! Board configuration.
//!
//! A board is configured at construction with the cells designated as exits.
//! Exits are carried as metadata only: no placement rule consults them yet.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::position::Position;

/// Exit cells used when no configuration is given.
pub const DEFAULT_EXITS: [Position; 2] = [Position::new(0, 1), Position::new(6, 3)];

/// Configuration owned by a single [`crate::board::Board`].
///
/// ## Example
///
/// ```
/// use rail_tiles::core::{BoardConfig, Position};
///
/// let config = BoardConfig::new().with_exit(Position::new(3, 0));
/// assert!(config.is_exit(Position::new(3, 0)));
/// assert!(config.is_exit(Position::new(0, 1)));
///
/// let bare = BoardConfig::without_exits();
/// assert!(bare.exits().next().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    exits: FxHashSet<Position>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            exits: DEFAULT_EXITS.into_iter().collect(),
        }
    }
}

impl BoardConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with no exits.
    #[must_use]
    pub fn without_exits() -> Self {
        Self {
            exits: FxHashSet::default(),
        }
    }

    /// Add an exit cell.
    #[must_use]
    pub fn with_exit(mut self, pos: Position) -> Self {
        self.exits.insert(pos);
        self
    }

    /// Check if a cell is an exit.
    #[must_use]
    pub fn is_exit(&self, pos: Position) -> bool {
        self.exits.contains(&pos)
    }

    /// Iterate over exit cells in no particular order.
    pub fn exits(&self) -> impl Iterator<Item = Position> + '_ {
        self.exits.iter().copied()
    }
}
