//! Coordinate types for the tiled world.
//!
//! Two coordinate spaces exist and must never be mixed: a tile's position
//! within the world grid ([`TileCoord`]) and a pixel's position local to one
//! tile ([`PixelPos`]). They are deliberately distinct types so that the
//! scheduler (grid space) and the plane fill (pixel space) cannot be handed
//! each other's coordinates by accident.

mod types;

pub use types::{EdgeDir, PixelPos, TileCoord};

#[cfg(test)]
mod tests;
