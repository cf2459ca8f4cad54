//! Flood fill confined to a single pixel buffer.
//!
//! [`plane_fill`] expands from a set of seed positions over the 8-connected
//! neighborhood (orthogonal and diagonal neighbors), painting every pixel
//! whose color RGB-matches the source color. It never leaves the buffer it
//! is handed and performs no I/O; crossing into neighboring tiles is the
//! scheduler's job, driven by the [`Edges`] record this function returns.
//!
//! The expansion uses an explicit work list and a visited set rather than
//! recursion, so a large tile cannot exhaust the call stack.

use std::collections::{HashSet, VecDeque};

use image::{Rgba, RgbaImage};

use crate::color::rgb_eq;
use crate::coord::{EdgeDir, PixelPos, TileCoord};

/// Per-edge lists of filled pixel coordinates that touch a tile's edges.
///
/// Left and right store the row (y) of each crossing pixel; top and bottom
/// store the column (x). These are the seeds handed to the neighboring tile
/// on the opposite edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edges {
    /// Rows of filled pixels on the left edge (x = 0).
    pub left: Vec<u32>,
    /// Columns of filled pixels on the top edge (y = 0).
    pub top: Vec<u32>,
    /// Rows of filled pixels on the right edge (x = width − 1).
    pub right: Vec<u32>,
    /// Columns of filled pixels on the bottom edge (y = height − 1).
    pub bottom: Vec<u32>,
}

impl Edges {
    /// Returns true when no edge holds any crossing.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.top.is_empty() && self.right.is_empty() && self.bottom.is_empty()
    }

    /// The crossing list for one edge.
    pub fn side(&self, dir: EdgeDir) -> &[u32] {
        match dir {
            EdgeDir::Left => &self.left,
            EdgeDir::Top => &self.top,
            EdgeDir::Right => &self.right,
            EdgeDir::Bottom => &self.bottom,
        }
    }

    /// Appends crossings to one edge's list.
    pub fn extend(&mut self, dir: EdgeDir, coords: impl IntoIterator<Item = u32>) {
        let side = match dir {
            EdgeDir::Left => &mut self.left,
            EdgeDir::Top => &mut self.top,
            EdgeDir::Right => &mut self.right,
            EdgeDir::Bottom => &mut self.bottom,
        };
        side.extend(coords);
    }

    /// Consumes the record into `(edge, crossings)` pairs.
    pub fn into_sides(self) -> [(EdgeDir, Vec<u32>); 4] {
        [
            (EdgeDir::Left, self.left),
            (EdgeDir::Top, self.top),
            (EdgeDir::Right, self.right),
            (EdgeDir::Bottom, self.bottom),
        ]
    }
}

/// A worker's report: which filled pixels of one tile touch its edges.
#[derive(Debug, Clone)]
pub struct Border {
    /// The reporting tile's grid position.
    pub tile: TileCoord,
    /// Edge crossings produced by the fill pass.
    pub edges: Edges,
}

impl Border {
    /// A report with no crossings.
    ///
    /// Also the degraded report for a tile whose load, decode or persist
    /// failed: the run continues without propagation from that tile.
    pub fn empty(tile: TileCoord) -> Self {
        Self {
            tile,
            edges: Edges::default(),
        }
    }
}

/// Flood-fills `image` from `seeds`, painting RGB matches of `from` with `to`.
///
/// Expansion is breadth-first over the 8-connected neighborhood. Every
/// position is examined at most once; a position whose color does not
/// RGB-match `from` is dropped with no effect, so re-filling an already
/// filled region is a no-op. Out-of-bounds seeds and neighbors are ignored.
///
/// Returns the edge crossings accumulated while painting.
pub fn plane_fill(
    image: &mut RgbaImage,
    seeds: impl IntoIterator<Item = PixelPos>,
    from: Rgba<u8>,
    to: Rgba<u8>,
) -> Edges {
    let (width, height) = image.dimensions();
    let mut edges = Edges::default();
    if width == 0 || height == 0 {
        return edges;
    }

    let mut frontier: VecDeque<PixelPos> = seeds.into_iter().collect();
    let mut visited: HashSet<PixelPos> = HashSet::new();

    while let Some(pos) = frontier.pop_front() {
        if pos.x >= width || pos.y >= height {
            continue;
        }
        if !visited.insert(pos) {
            continue;
        }
        if !rgb_eq(*image.get_pixel(pos.x, pos.y), from) {
            continue;
        }
        // Target alpha is written verbatim even though matching ignored it.
        image.put_pixel(pos.x, pos.y, to);

        if pos.x == 0 {
            edges.left.push(pos.y);
        }
        if pos.y == 0 {
            edges.top.push(pos.x);
        }
        if pos.x == width - 1 {
            edges.right.push(pos.y);
        }
        if pos.y == height - 1 {
            edges.bottom.push(pos.x);
        }

        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = pos.x as i64 + dx;
                let ny = pos.y as i64 + dy;
                if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let next = PixelPos::new(nx as u32, ny as u32);
                if !visited.contains(&next) {
                    frontier.push_back(next);
                }
            }
        }
    }

    edges
}
