//! Edge connection categories.
//!
//! Every tile edge presents one `ConnectionType` toward the neighboring cell.
//! Two facing edges may sit next to each other when they are [`compatible`].

use serde::{Deserialize, Serialize};

/// Category of path a tile edge presents toward a neighbor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionType {
    /// No path leaves through this edge.
    #[default]
    None,
    /// A road.
    Highway,
    /// A railway track.
    Railway,
    /// A station platform.
    Station,
}

impl ConnectionType {
    /// All connection types, in declaration order.
    pub const ALL: [ConnectionType; 4] = [
        ConnectionType::None,
        ConnectionType::Highway,
        ConnectionType::Railway,
        ConnectionType::Station,
    ];

    /// Check if this edge carries no path.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, ConnectionType::None)
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ConnectionType::None => "none",
            ConnectionType::Highway => "highway",
            ConnectionType::Railway => "railway",
            ConnectionType::Station => "station",
        }
    }
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check if two facing edges may touch.
///
/// Edges match when they carry the same category. `None` matches anything,
/// on either side, so the relation is symmetric.
///
/// ```
/// use rail_tiles::core::{compatible, ConnectionType};
///
/// assert!(compatible(ConnectionType::Railway, ConnectionType::Railway));
/// assert!(compatible(ConnectionType::None, ConnectionType::Station));
/// assert!(!compatible(ConnectionType::Highway, ConnectionType::Railway));
/// ```
#[must_use]
pub const fn compatible(a: ConnectionType, b: ConnectionType) -> bool {
    a.is_none() || b.is_none() || a as u8 == b as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_category_compatible() {
        for c in ConnectionType::ALL {
            assert!(compatible(c, c));
        }
    }

    #[test]
    fn test_none_is_wildcard() {
        for c in ConnectionType::ALL {
            assert!(compatible(ConnectionType::None, c));
            assert!(compatible(c, ConnectionType::None));
        }
    }

    #[test]
    fn test_distinct_categories_clash() {
        assert!(!compatible(ConnectionType::Highway, ConnectionType::Railway));
        assert!(!compatible(ConnectionType::Railway, ConnectionType::Station));
        assert!(!compatible(ConnectionType::Station, ConnectionType::Highway));
    }

    #[test]
    fn test_display() {
        assert_eq!(ConnectionType::Highway.to_string(), "highway");
        assert_eq!(format!("{}", ConnectionType::None), "none");
    }
}
