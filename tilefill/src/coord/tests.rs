//! Tests for coordinate types

use super::*;

#[test]
fn test_neighbor_offsets() {
    let tile = TileCoord::new(3, 7);
    assert_eq!(tile.neighbor(EdgeDir::Left), TileCoord::new(2, 7));
    assert_eq!(tile.neighbor(EdgeDir::Top), TileCoord::new(3, 6));
    assert_eq!(tile.neighbor(EdgeDir::Right), TileCoord::new(4, 7));
    assert_eq!(tile.neighbor(EdgeDir::Bottom), TileCoord::new(3, 8));
}

#[test]
fn test_neighbor_can_leave_the_stored_world() {
    // Grid coordinates are signed; the worker resolves missing tiles.
    let origin = TileCoord::new(0, 0);
    assert_eq!(origin.neighbor(EdgeDir::Left), TileCoord::new(-1, 0));
    assert_eq!(origin.neighbor(EdgeDir::Top), TileCoord::new(0, -1));
}

#[test]
fn test_opposite_edges_pair_up() {
    for dir in EdgeDir::ALL {
        assert_eq!(dir.opposite().opposite(), dir);
    }
    assert_eq!(EdgeDir::Right.opposite(), EdgeDir::Left);
    assert_eq!(EdgeDir::Bottom.opposite(), EdgeDir::Top);
}

#[test]
fn test_opposite_offset_cancels() {
    for dir in EdgeDir::ALL {
        let (dx, dy) = dir.offset();
        let (ox, oy) = dir.opposite().offset();
        assert_eq!((dx + ox, dy + oy), (0, 0));
    }
}

#[test]
fn test_display_formats() {
    assert_eq!(TileCoord::new(-1, 2).to_string(), "(-1, 2)");
    assert_eq!(PixelPos::new(4, 0).to_string(), "(4, 0)");
    assert_eq!(EdgeDir::Bottom.to_string(), "bottom");
}
