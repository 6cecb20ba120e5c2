//! Board coordinates and their human-facing notation.
//!
//! ## Coordinates
//!
//! A `Position` is a 0-based `(row, col)` pair. Row 0 is the top of the
//! board, column 0 the left edge. Positions may lie off the board; the board
//! decides whether they are in bounds.
//!
//! ## Notation
//!
//! Cells are named by a column letter followed by a row digit, with row `1`
//! at the bottom:
//!
//! ```
//! use rail_tiles::core::Position;
//!
//! assert_eq!(Position::new(0, 0).to_string(), "A7");
//! assert_eq!("D4".parse::<Position>().unwrap(), Position::new(3, 3));
//! assert_eq!("G1".parse::<Position>().unwrap(), Position::new(6, 6));
//! ```

use serde::{Deserialize, Serialize};

use super::error::PlacementError;

/// Width and height of the board, in cells.
pub const BOARD_SIZE: usize = 7;

/// A cell coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: i32,
    col: i32,
}

impl Position {
    /// Create a position from a row and column.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Row index, 0 at the top.
    #[must_use]
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Column index, 0 at the left.
    #[must_use]
    pub const fn col(self) -> i32 {
        self.col
    }

    /// Check if the position lies on a `BOARD_SIZE` x `BOARD_SIZE` board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        let size = BOARD_SIZE as i32;
        self.row >= 0 && self.row < size && self.col >= 0 && self.col < size
    }

    /// The adjacent position one step in `direction`. May be off the board.
    ///
    /// Saturates at the `i32` limits.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset();
        Self::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }

    /// Notation such as `"A7"`, or `None` for positions off the board.
    #[must_use]
    pub fn to_notation(self) -> Option<String> {
        if !self.in_bounds() {
            return None;
        }
        let letter = char::from(b'A' + self.col as u8);
        Some(format!("{}{}", letter, BOARD_SIZE as i32 - self.row))
    }

    /// Parse notation such as `"D4"`.
    ///
    /// Accepts exactly one uppercase column letter and one row digit, both
    /// within the board.
    pub fn from_notation(notation: &str) -> Result<Self, PlacementError> {
        let invalid = || PlacementError::InvalidNotation(notation.to_string());

        let &[letter, digit] = notation.as_bytes() else {
            return Err(invalid());
        };

        let size = BOARD_SIZE as u8;
        if !(b'A'..b'A' + size).contains(&letter) || !(b'1'..=b'0' + size).contains(&digit) {
            return Err(invalid());
        }

        let col = i32::from(letter - b'A');
        let row = BOARD_SIZE as i32 - i32::from(digit - b'0');
        Ok(Self::new(row, col))
    }

    /// Iterate over every position on the board, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        let size = BOARD_SIZE as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::str::FromStr for Position {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_notation() {
            Some(notation) => f.write_str(&notation),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// One of the four neighbor directions of a cell.
///
/// The discriminant is the index of the matching edge in a tile's
/// `[North, East, South, West]` connection array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row - 1.
    North = 0,
    /// Toward col + 1.
    East = 1,
    /// Toward row + 1.
    South = 2,
    /// Toward col - 1.
    West = 3,
}

impl Direction {
    /// All directions in connection-array order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Index into a `[North, East, South, West]` array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// `(row, col)` delta of one step in this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// The direction pointing back.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_corners() {
        assert_eq!(Position::new(0, 0).to_notation().as_deref(), Some("A7"));
        assert_eq!(Position::new(6, 0).to_notation().as_deref(), Some("A1"));
        assert_eq!(Position::new(0, 6).to_notation().as_deref(), Some("G7"));
        assert_eq!(Position::new(6, 6).to_notation().as_deref(), Some("G1"));
    }

    #[test]
    fn test_notation_round_trip() {
        for pos in Position::all() {
            let notation = pos.to_notation().unwrap();
            assert_eq!(Position::from_notation(&notation).unwrap(), pos);
        }
        assert_eq!(Position::all().count(), 49);
    }

    #[test]
    fn test_notation_rejects_garbage() {
        for bad in ["", "A", "A0", "A8", "H1", "a1", "A10", "1A", "Ä1"] {
            assert_eq!(
                Position::from_notation(bad),
                Err(PlacementError::InvalidNotation(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_off_board_display() {
        let pos = Position::new(-1, 3);
        assert!(!pos.in_bounds());
        assert_eq!(pos.to_notation(), None);
        assert_eq!(pos.to_string(), "(-1, 3)");
    }

    #[test]
    fn test_equality_and_hash() {
        use rustc_hash::FxHashSet;

        let mut set = FxHashSet::default();
        set.insert(Position::new(2, 3));
        assert!(set.contains(&Position::from((2, 3))));
        assert!(!set.contains(&Position::new(3, 2)));
    }

    #[test]
    fn test_step_and_opposite() {
        let pos = Position::new(3, 3);
        for dir in Direction::ALL {
            assert_eq!(pos.step(dir).step(dir.opposite()), pos);
        }
        assert_eq!(pos.step(Direction::North), Position::new(2, 3));
        assert_eq!(pos.step(Direction::East), Position::new(3, 4));
        assert_eq!(Direction::West.index(), 3);
    }

    #[test]
    fn test_step_saturates() {
        let corner = Position::new(i32::MAX, i32::MIN);
        assert_eq!(corner.step(Direction::South), corner);
        assert_eq!(corner.step(Direction::West), corner);
        assert_eq!(corner.step(Direction::North), Position::new(i32::MAX - 1, i32::MIN));
    }
}
