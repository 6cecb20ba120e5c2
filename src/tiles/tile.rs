//! Tile instances - a kind plus its current rotation.
//!
//! A `Tile` keeps its connection array in step with its orientation: every
//! quarter turn advances the orientation and shifts the array by one slot.
//! There is no way to set the orientation directly, so the two cannot drift
//! apart.

use crate::core::{ConnectionType, Direction, Orientation, PlacementError};

use super::kind::TileKind;

/// A placeable tile.
///
/// ## Example
///
/// ```
/// use rail_tiles::core::{ConnectionType, Orientation};
/// use rail_tiles::tiles::{Tile, TileKind};
///
/// let mut tile = Tile::new(TileKind::HighwayStraight);
/// tile.rotate();
///
/// assert_eq!(tile.orientation(), Orientation::East);
/// assert_eq!(
///     tile.connections(),
///     [
///         ConnectionType::None,
///         ConnectionType::Highway,
///         ConnectionType::None,
///         ConnectionType::Highway,
///     ]
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    kind: TileKind,
    orientation: Orientation,
    /// `[North, East, South, West]` for the current orientation.
    connections: [ConnectionType; 4],
}

impl Tile {
    /// Create an unrotated tile of the given kind.
    #[must_use]
    pub const fn new(kind: TileKind) -> Self {
        Self {
            kind,
            orientation: Orientation::North,
            connections: kind.base_connections(),
        }
    }

    /// Create a tile and apply `steps` quarter turns.
    #[must_use]
    pub fn rotated(kind: TileKind, steps: usize) -> Self {
        let mut tile = Self::new(kind);
        for _ in 0..steps % 4 {
            tile.rotate();
        }
        tile
    }

    /// Create a tile turned by `degrees`, which must be a multiple of 90.
    ///
    /// Negative angles are normalized, so `-90` is three quarter turns.
    pub fn with_rotation(kind: TileKind, degrees: i32) -> Result<Self, PlacementError> {
        let orientation = Orientation::try_from_degrees(degrees)?;
        Ok(Self::rotated(kind, orientation.quarter_turns()))
    }

    /// Turn the tile one quarter.
    ///
    /// The connection array shifts one slot toward the front: the North slot
    /// takes the old East value and the old North value moves to West.
    pub fn rotate(&mut self) {
        self.orientation = self.orientation.rotate_cw();
        self.connections.rotate_left(1);
    }

    /// The tile's archetype.
    #[must_use]
    pub const fn kind(&self) -> TileKind {
        self.kind
    }

    /// Current orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Current `[North, East, South, West]` connections.
    #[must_use]
    pub const fn connections(&self) -> [ConnectionType; 4] {
        self.connections
    }

    /// The edge facing `direction`.
    #[must_use]
    pub const fn connection(&self, direction: Direction) -> ConnectionType {
        self.connections[direction.index()]
    }
}

impl From<TileKind> for Tile {
    fn from(kind: TileKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConnectionType::{Highway as H, None as N, Railway as R, Station as S};

    #[test]
    fn test_new_is_unrotated() {
        for kind in TileKind::ALL {
            let tile = Tile::new(kind);
            assert_eq!(tile.kind(), kind);
            assert_eq!(tile.orientation(), Orientation::North);
            assert_eq!(tile.connections(), kind.base_connections());
        }
    }

    #[test]
    fn test_rotate_shifts_left() {
        let mut tile = Tile::new(TileKind::HighwayCurve);
        tile.rotate();
        assert_eq!(tile.connections(), [H, N, N, H]);
        tile.rotate();
        assert_eq!(tile.connections(), [N, N, H, H]);
        assert_eq!(tile.orientation(), Orientation::South);
    }

    #[test]
    fn test_four_turns_restore() {
        for kind in TileKind::ALL {
            let mut tile = Tile::new(kind);
            for _ in 0..4 {
                tile.rotate();
            }
            assert_eq!(tile, Tile::new(kind));
        }
    }

    #[test]
    fn test_with_rotation() {
        let tile = Tile::with_rotation(TileKind::Overpass, 90).unwrap();
        assert_eq!(tile.orientation(), Orientation::East);
        assert_eq!(tile.connections(), [R, H, R, H]);

        let tile = Tile::with_rotation(TileKind::StationCurve, -90).unwrap();
        assert_eq!(tile.orientation(), Orientation::West);
        assert_eq!(tile, Tile::rotated(TileKind::StationCurve, 3));
        assert_eq!(tile.connections(), [N, S, S, N]);

        assert_eq!(
            Tile::with_rotation(TileKind::Overpass, 100),
            Err(PlacementError::UnsupportedRotation(100))
        );
    }

    #[test]
    fn test_connection_by_direction() {
        let tile = Tile::new(TileKind::StationHighwayJunction);
        assert_eq!(tile.connection(Direction::North), S);
        assert_eq!(tile.connection(Direction::East), H);
        assert_eq!(tile.connection(Direction::South), S);
        assert_eq!(tile.connection(Direction::West), H);
    }
}
