//! Tile archetypes and their unrotated edge geometry.
//!
//! `TileKind` identifies the static "type" of a tile. Its base connections
//! are read from a single table indexed by the kind; instance state
//! (orientation, rotated connections) lives in [`super::Tile`].

use serde::{Deserialize, Serialize};

use crate::core::{ConnectionType, PlacementError};

use crate::core::ConnectionType::{Highway as H, None as N, Railway as R, Station as S};

/// Archetype of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TileKind {
    HighwayStraight,
    HighwayCurve,
    HighwayJunction,
    HighwayCross,
    RailwayStraight,
    RailwayCurve,
    RailwayJunction,
    RailwayCross,
    StationStraight,
    StationCurve,
    StationCross,
    StationReflect,
    StationHighwayJunction,
    StationRailwayJunction,
    Overpass,
}

/// Base `[North, East, South, West]` connections, indexed by `TileKind as usize`.
const BASE_CONNECTIONS: [[ConnectionType; 4]; TileKind::COUNT] = [
    [H, N, H, N], // HighwayStraight
    [H, H, N, N], // HighwayCurve
    [H, H, H, H], // HighwayJunction
    [H, H, H, H], // HighwayCross
    [R, N, R, N], // RailwayStraight
    [R, R, N, N], // RailwayCurve
    [R, R, R, R], // RailwayJunction
    [R, R, R, R], // RailwayCross
    [S, N, S, N], // StationStraight
    [S, S, N, N], // StationCurve
    [S, S, S, S], // StationCross
    [S, S, S, S], // StationReflect
    [S, H, S, H], // StationHighwayJunction
    [S, R, S, R], // StationRailwayJunction
    [H, R, H, R], // Overpass
];

/// Asset names, indexed by `TileKind as usize`.
const ASSET_NAMES: [&str; TileKind::COUNT] = [
    "highway-straight",
    "highway-curve",
    "highway-junction",
    "highway-cross",
    "railway-straight",
    "railway-curve",
    "railway-junction",
    "railway-cross",
    "station-straight",
    "station-curve",
    "station-cross",
    "station-reflect",
    "station-highway-junction",
    "station-railway-junction",
    "overpass",
];

impl TileKind {
    /// Number of tile kinds.
    pub const COUNT: usize = 15;

    /// All tile kinds, in declaration order.
    pub const ALL: [TileKind; TileKind::COUNT] = [
        TileKind::HighwayStraight,
        TileKind::HighwayCurve,
        TileKind::HighwayJunction,
        TileKind::HighwayCross,
        TileKind::RailwayStraight,
        TileKind::RailwayCurve,
        TileKind::RailwayJunction,
        TileKind::RailwayCross,
        TileKind::StationStraight,
        TileKind::StationCurve,
        TileKind::StationCross,
        TileKind::StationReflect,
        TileKind::StationHighwayJunction,
        TileKind::StationRailwayJunction,
        TileKind::Overpass,
    ];

    /// Unrotated `[North, East, South, West]` connections.
    ///
    /// ```
    /// use rail_tiles::core::ConnectionType;
    /// use rail_tiles::tiles::TileKind;
    ///
    /// assert_eq!(
    ///     TileKind::Overpass.base_connections(),
    ///     [
    ///         ConnectionType::Highway,
    ///         ConnectionType::Railway,
    ///         ConnectionType::Highway,
    ///         ConnectionType::Railway,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub const fn base_connections(self) -> [ConnectionType; 4] {
        BASE_CONNECTIONS[self as usize]
    }

    /// Name of the display asset, e.g. `"railway-curve"`.
    #[must_use]
    pub const fn asset_name(self) -> &'static str {
        ASSET_NAMES[self as usize]
    }

    /// Relative path of the display asset, e.g. `"graphics/railway-curve.png"`.
    ///
    /// The crate never reads it; loading is up to the presentation layer.
    #[must_use]
    pub fn image_path(self) -> String {
        format!("graphics/{}.png", self.asset_name())
    }

    /// Look up a kind by its asset name.
    pub fn from_asset_name(name: &str) -> Result<Self, PlacementError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.asset_name() == name)
            .ok_or_else(|| PlacementError::UnknownTileKind(name.to_string()))
    }
}

impl std::str::FromStr for TileKind {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_asset_name(s)
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.asset_name())
    }
}
