//! Tile orientation in quarter turns.

use serde::{Deserialize, Serialize};

use super::error::PlacementError;

/// Rotational state of a tile, one of four 90° steps clockwise from North.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// 0°, the unrotated state.
    #[default]
    North,
    /// 90°.
    East,
    /// 180°.
    South,
    /// 270°.
    West,
}

impl Orientation {
    /// All orientations in clockwise order starting at North.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Angle in degrees, in `[0, 360)`.
    #[must_use]
    pub const fn degrees(self) -> i32 {
        match self {
            Orientation::North => 0,
            Orientation::East => 90,
            Orientation::South => 180,
            Orientation::West => 270,
        }
    }

    /// Number of clockwise quarter turns from North.
    #[must_use]
    pub const fn quarter_turns(self) -> usize {
        (self.degrees() / 90) as usize
    }

    /// Rotate clockwise (90°).
    ///
    /// ```
    /// use rail_tiles::core::Orientation;
    ///
    /// assert_eq!(Orientation::North.rotate_cw(), Orientation::East);
    /// assert_eq!(Orientation::West.rotate_cw(), Orientation::North);
    /// ```
    #[must_use]
    pub const fn rotate_cw(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    /// Orientation for an angle, normalized into `[0, 360)` first.
    ///
    /// Angles that are not a multiple of 90 fall back to North. Use
    /// [`Orientation::try_from_degrees`] to reject them instead.
    ///
    /// ```
    /// use rail_tiles::core::Orientation;
    ///
    /// assert_eq!(Orientation::from_degrees(-90), Orientation::West);
    /// assert_eq!(Orientation::from_degrees(450), Orientation::East);
    /// assert_eq!(Orientation::from_degrees(45), Orientation::North);
    /// ```
    #[must_use]
    pub fn from_degrees(angle: i32) -> Self {
        Self::try_from_degrees(angle).unwrap_or(Orientation::North)
    }

    /// Orientation for an angle, rejecting anything that is not a multiple of 90.
    pub fn try_from_degrees(angle: i32) -> Result<Self, PlacementError> {
        match angle.rem_euclid(360) {
            0 => Ok(Orientation::North),
            90 => Ok(Orientation::East),
            180 => Ok(Orientation::South),
            270 => Ok(Orientation::West),
            _ => Err(PlacementError::UnsupportedRotation(angle)),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
