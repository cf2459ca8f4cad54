//! TileFill - Distributed flood fill over a tiled image world
//!
//! This library fills a connected region of pixels with a replacement color.
//! The image is either a single raster or a "world": a grid of equally-sized
//! PNG tiles stored as independent files and addressed by grid coordinates.
//! A fill that spans several tiles is propagated across tile boundaries on
//! demand, so the whole world's pixels are never held in memory at once.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     world::fill_world                        │
//! │   seeds the initial Work, spawns everything, awaits quiet   │
//! └─────────────────────────────────────────────────────────────┘
//!                │ Work (dispatch channel)        ▲ Border (result channel)
//!                ▼                                │
//! ┌──────────────────────┐              ┌──────────────────────┐
//! │      Scheduler       │              │    Worker pool (N)   │
//! │ pending/todo/in-flight│──────────────│ load → fill → save  │
//! └──────────────────────┘              └──────────────────────┘
//!                                                │
//!                                                ▼
//!                                     ┌──────────────────────┐
//!                                     │ TileStore + plane fill│
//!                                     └──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use tilefill::coord::{PixelPos, TileCoord};
//! use tilefill::store::TileStore;
//! use tilefill::world::{fill_world, WorldOptions};
//! use image::Rgba;
//!
//! let store = TileStore::new("tiles/");
//! fill_world(
//!     store,
//!     TileCoord::new(0, 0),
//!     PixelPos::new(3, 3),
//!     Rgba([0, 0, 255, 255]),
//!     WorldOptions::default(),
//! )
//! .await?;
//! ```

pub mod color;
pub mod coord;
pub mod fill;
pub mod grid;
pub mod logging;
pub mod scheduler;
pub mod single;
pub mod store;
pub mod worker;
pub mod world;

/// Version of the TileFill library and CLI.
///
/// Synchronized across all workspace members via `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
