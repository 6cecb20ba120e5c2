//! Property-based tests using proptest

use proptest::prelude::*;
use rail_tiles::board::Board;
use rail_tiles::core::{
    compatible, ConnectionType, Orientation, PlacementError, Position, BOARD_SIZE,
};
use rail_tiles::tiles::{Tile, TileKind};

fn any_kind() -> impl Strategy<Value = TileKind> {
    prop::sample::select(TileKind::ALL.to_vec())
}

fn any_connection() -> impl Strategy<Value = ConnectionType> {
    prop::sample::select(ConnectionType::ALL.to_vec())
}

fn any_position() -> impl Strategy<Value = Position> {
    let size = BOARD_SIZE as i32;
    (0..size, 0..size).prop_map(|(row, col)| Position::new(row, col))
}

proptest! {
    #[test]
    fn rotation_has_period_four(kind in any_kind(), start in 0usize..4) {
        let original = Tile::rotated(kind, start);
        let mut tile = original;
        for _ in 0..4 {
            tile.rotate();
        }
        prop_assert_eq!(tile, original);
    }

    #[test]
    fn orientation_tracks_connections(kind in any_kind(), steps in 0usize..12) {
        let tile = Tile::rotated(kind, steps);
        let mut expected = kind.base_connections();
        expected.rotate_left(steps % 4);
        prop_assert_eq!(tile.connections(), expected);
        prop_assert_eq!(tile.orientation().quarter_turns(), steps % 4);
    }

    #[test]
    fn compatibility_is_symmetric(a in any_connection(), b in any_connection()) {
        prop_assert_eq!(compatible(a, b), compatible(b, a));
    }

    #[test]
    fn none_is_absorbing(x in any_connection()) {
        prop_assert!(compatible(ConnectionType::None, x));
    }

    #[test]
    fn empty_board_accepts_anything(pos in any_position(), kind in any_kind(), steps in 0usize..4) {
        let mut board = Board::new();
        let tile = Tile::rotated(kind, steps);
        prop_assert!(board.is_valid_placement(pos, &tile));
        prop_assert!(board.place_tile(pos, tile).is_ok());
        prop_assert_eq!(board.get(pos), Some(&tile));
    }

    #[test]
    fn occupied_cell_never_changes(
        pos in any_position(),
        first in any_kind(),
        second in any_kind(),
    ) {
        let mut board = Board::new();
        board.place_tile(pos, Tile::new(first)).unwrap();
        let before = board.clone();

        prop_assert_eq!(
            board.place_tile(pos, Tile::new(second)),
            Err(PlacementError::CellOccupied(pos))
        );
        prop_assert_eq!(board, before);
    }

    #[test]
    fn notation_round_trips(pos in any_position()) {
        let notation = pos.to_notation().unwrap();
        prop_assert_eq!(notation.parse::<Position>(), Ok(pos));
        prop_assert_eq!(pos.to_string(), notation);
    }

    #[test]
    fn lenient_degrees_normalize(turns in -20i32..20) {
        let expected = Orientation::ALL[turns.rem_euclid(4) as usize];
        prop_assert_eq!(Orientation::from_degrees(turns * 90), expected);
        prop_assert_eq!(Orientation::try_from_degrees(turns * 90), Ok(expected));
    }

    #[test]
    fn placement_matches_neighbor_edges(
        kinds in prop::collection::vec((any_kind(), 0usize..4), 1..30),
        cells in prop::collection::vec(any_position(), 1..30),
    ) {
        let mut board = Board::new();
        for ((kind, steps), pos) in kinds.into_iter().zip(cells) {
            let _ = board.place_tile(pos, Tile::rotated(kind, steps));
        }

        // Every placed pair of neighbors must meet on compatible edges
        for (pos, tile) in board.iter() {
            for (dir, neighbor) in board.occupied_neighbors(pos) {
                prop_assert!(compatible(
                    tile.connection(dir),
                    neighbor.connection(dir.opposite())
                ));
            }
        }
    }
}
