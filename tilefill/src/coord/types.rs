//! Coordinate type definitions

use std::fmt;

/// A tile's position within the world grid.
///
/// Coordinates are signed: a fill that reaches the edge of the stored world
/// propagates to grid positions whose tile file does not exist, and workers
/// resolve those as a missing-tile no-op rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// X coordinate (west-east), 0 at the first stored column.
    pub x: i32,
    /// Y coordinate (north-south), 0 at the first stored row.
    pub y: i32,
}

impl TileCoord {
    /// Creates a tile coordinate.
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the adjacent tile one grid step in the given edge direction.
    #[inline]
    pub fn neighbor(self, dir: EdgeDir) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A pixel's position local to one tile's buffer.
///
/// Always in-bounds coordinates are unsigned; the plane fill drops any
/// position outside the buffer it is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelPos {
    /// Column within the tile, 0 at the left edge.
    pub x: u32,
    /// Row within the tile, 0 at the top edge.
    pub y: u32,
}

impl PixelPos {
    /// Creates a local pixel position.
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PixelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four edges of a tile.
///
/// Used both to tag which edge a filled pixel touched and to address the
/// neighboring tile the crossing propagates into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeDir {
    Left,
    Top,
    Right,
    Bottom,
}

impl EdgeDir {
    /// All four edges, in left/top/right/bottom order.
    pub const ALL: [EdgeDir; 4] = [EdgeDir::Left, EdgeDir::Top, EdgeDir::Right, EdgeDir::Bottom];

    /// The grid offset to the neighboring tile across this edge.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            EdgeDir::Left => (-1, 0),
            EdgeDir::Top => (0, -1),
            EdgeDir::Right => (1, 0),
            EdgeDir::Bottom => (0, 1),
        }
    }

    /// The edge a crossing arrives on in the neighboring tile.
    ///
    /// A pixel filled on one tile's right edge seeds the left edge of the
    /// tile one grid step to the right, and so on.
    #[inline]
    pub fn opposite(self) -> EdgeDir {
        match self {
            EdgeDir::Left => EdgeDir::Right,
            EdgeDir::Top => EdgeDir::Bottom,
            EdgeDir::Right => EdgeDir::Left,
            EdgeDir::Bottom => EdgeDir::Top,
        }
    }
}

impl fmt::Display for EdgeDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EdgeDir::Left => "left",
            EdgeDir::Top => "top",
            EdgeDir::Right => "right",
            EdgeDir::Bottom => "bottom",
        };
        f.write_str(name)
    }
}
