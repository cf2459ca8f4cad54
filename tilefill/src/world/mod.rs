//! World fill orchestration.
//!
//! [`fill_world`] is the entry point for a distributed fill: it reads the
//! source color from the starting pixel, seeds the scheduler with one work
//! item, spawns the scheduler task and a fixed pool of worker tasks, and
//! waits for quiescence.
//!
//! The scheduler and the workers communicate exclusively over two bounded
//! channels — dispatch (scheduler → workers) and result (workers →
//! scheduler). The scheduler dropping its dispatch sender at quiescence is
//! the pool's shutdown signal; the last worker dropping its result sender
//! lets everything drain. There is no cancellation or timeout: a run
//! proceeds to completion, or fails before any task is spawned.

use std::sync::Arc;

use image::Rgba;
use thiserror::Error;
use tokio::sync::{mpsc, Mutex};
use tracing::info;

use crate::color::rgb_eq;
use crate::coord::{PixelPos, TileCoord};
use crate::fill::Border;
use crate::scheduler::{Scheduler, Work};
use crate::store::{StoreError, TileStore};
use crate::worker;

/// Default number of concurrent workers.
pub const DEFAULT_WORKERS: usize = 10;

/// Default capacity of the dispatch and result channels.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Tuning options for a world fill run.
#[derive(Debug, Clone)]
pub struct WorldOptions {
    /// Number of concurrent worker tasks (at least 1).
    pub workers: usize,
    /// Capacity of the dispatch and result channels.
    pub channel_capacity: usize,
}

impl Default for WorldOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl WorldOptions {
    /// Sets the worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}

/// Errors that abort a world fill before any tile is scheduled.
///
/// Faults on tiles other than the starting one never surface here; they
/// degrade to empty border reports inside the worker pool.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The starting tile could not be loaded. The one fatal fault.
    #[error("failed to load starting tile {tile}: {source}")]
    StartTile {
        tile: TileCoord,
        #[source]
        source: StoreError,
    },

    /// The starting pixel lies outside the starting tile.
    #[error("starting pixel {pixel} is outside the {width}x{height} starting tile")]
    SeedOutOfBounds {
        pixel: PixelPos,
        width: u32,
        height: u32,
    },

    /// The scheduler or a worker task was aborted or panicked.
    #[error("fill task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Flood-fills the world reachable from one pixel of one tile.
///
/// Reads the starting pixel's color as the source color. If it already
/// RGB-matches `to`, returns immediately with zero side effects. Otherwise
/// runs scheduler and workers to quiescence: every pixel 8-connected to the
/// seed through same-RGB pixels — including across shared tile edges — ends
/// as `to`, and all unreached pixels are unchanged.
pub async fn fill_world(
    store: TileStore,
    start_tile: TileCoord,
    start_pixel: PixelPos,
    to: Rgba<u8>,
    options: WorldOptions,
) -> Result<(), WorldError> {
    let image = store
        .load(start_tile)
        .await
        .map_err(|source| WorldError::StartTile {
            tile: start_tile,
            source,
        })?;

    let (width, height) = image.dimensions();
    if start_pixel.x >= width || start_pixel.y >= height {
        return Err(WorldError::SeedOutOfBounds {
            pixel: start_pixel,
            width,
            height,
        });
    }

    let from = *image.get_pixel(start_pixel.x, start_pixel.y);
    if rgb_eq(from, to) {
        info!(tile = %start_tile, pixel = %start_pixel, "seed already matches target color, nothing to fill");
        return Ok(());
    }

    let workers = options.workers.max(1);
    info!(
        tile = %start_tile,
        pixel = %start_pixel,
        workers,
        "starting world fill"
    );

    let initial = Work::seeded(start_tile, store.tile_path(start_tile), start_pixel, from, to);
    let scheduler = Scheduler::new(store, initial);

    let (work_tx, work_rx) = mpsc::channel::<Work>(options.channel_capacity.max(1));
    let (result_tx, result_rx) = mpsc::channel::<Border>(options.channel_capacity.max(1));

    let scheduler_handle = tokio::spawn(scheduler.run(work_tx, result_rx));

    let queue: worker::SharedWorkQueue = Arc::new(Mutex::new(work_rx));
    let worker_handles: Vec<_> = (0..workers)
        .map(|id| tokio::spawn(worker::run(id, Arc::clone(&queue), result_tx.clone())))
        .collect();
    // The workers hold the only remaining result senders; once they exit the
    // result channel closes on its own.
    drop(result_tx);

    scheduler_handle.await?;
    for handle in worker_handles {
        handle.await?;
    }

    info!("world fill complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;
    use tempfile::TempDir;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[tokio::test]
    async fn test_missing_start_tile_is_fatal() {
        let dir = TempDir::new().unwrap();
        let store = TileStore::new(dir.path());

        let err = fill_world(
            store,
            TileCoord::new(0, 0),
            PixelPos::new(0, 0),
            RED,
            WorldOptions::default(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, WorldError::StartTile { .. }));
    }

    #[tokio::test]
    async fn test_out_of_bounds_seed_is_rejected_before_scheduling() {
        let dir = TempDir::new().unwrap();
        let store = TileStore::new(dir.path());
        let tile = TileCoord::new(0, 0);
        store
            .save(tile, RgbaImage::from_pixel(2, 2, RED))
            .await
            .unwrap();

        let err = fill_world(
            store,
            tile,
            PixelPos::new(2, 0),
            Rgba([0, 0, 255, 255]),
            WorldOptions::default(),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            WorldError::SeedOutOfBounds {
                width: 2,
                height: 2,
                ..
            }
        ));
    }
}
