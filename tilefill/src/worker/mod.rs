//! Worker tasks: one fill pass per dispatched tile.
//!
//! Each worker loops over the shared dispatch channel until the scheduler
//! closes it. A pass loads the tile's buffer, builds the seed set, runs the
//! plane fill on the blocking pool, persists the buffer as a whole-buffer
//! overwrite, and reports the resulting [`Border`] back.
//!
//! Faults degrade rather than abort: a tile that fails to load, decode or
//! persist is reported as an empty border, so the run continues without
//! propagation from that tile. A persist failure deliberately discards the
//! computed crossings — neighbors must not be seeded from pixels that were
//! never written back.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tokio::task;
use tracing::{debug, warn};

use crate::coord::PixelPos;
use crate::fill::{plane_fill, Border, Edges};
use crate::scheduler::Work;
use crate::store;

/// Dispatch channel receiver shared by the worker pool.
///
/// tokio's mpsc receiver is single-consumer, so the fixed pool shares it
/// behind a mutex; only the receive itself is serialized, the fill passes
/// run concurrently.
pub type SharedWorkQueue = Arc<Mutex<mpsc::Receiver<Work>>>;

/// Runs one worker until the dispatch channel closes.
pub async fn run(id: usize, queue: SharedWorkQueue, result_tx: mpsc::Sender<Border>) {
    debug!(worker = id, "worker started");
    loop {
        let work = { queue.lock().await.recv().await };
        let Some(work) = work else {
            break;
        };
        let border = process(work).await;
        if result_tx.send(border).await.is_err() {
            // Scheduler stopped early; nothing left to report to.
            break;
        }
    }
    debug!(worker = id, "worker finished");
}

/// Performs one load → fill → persist cycle, degrading faults to an empty
/// border report.
async fn process(work: Work) -> Border {
    let tile = work.tile;

    let image = match store::load_image(work.path.clone()).await {
        Ok(image) => image,
        Err(err) => {
            warn!(tile = %tile, error = %err, "skipping tile: load failed");
            return Border::empty(tile);
        }
    };

    let seeds = if work.pixels.is_empty() {
        edge_seeds(&work.edges, image.width(), image.height())
    } else {
        work.pixels
    };

    // The fill is CPU-bound; keep it off the async runtime like the I/O.
    let (from, to) = (work.from, work.to);
    let filled = task::spawn_blocking(move || {
        let mut image = image;
        let edges = plane_fill(&mut image, seeds, from, to);
        (image, edges)
    })
    .await;
    let (image, edges) = match filled {
        Ok(result) => result,
        Err(err) => {
            warn!(tile = %tile, error = %err, "skipping tile: fill task failed");
            return Border::empty(tile);
        }
    };

    match store::save_png(work.path, image).await {
        Ok(()) => Border { tile, edges },
        Err(err) => {
            warn!(tile = %tile, error = %err, "discarding crossings: persist failed");
            Border::empty(tile)
        }
    }
}

/// Translates accumulated edge crossings into absolute local seed positions.
fn edge_seeds(edges: &Edges, width: u32, height: u32) -> HashSet<PixelPos> {
    let mut seeds = HashSet::new();
    if width == 0 || height == 0 {
        return seeds;
    }
    for &y in &edges.left {
        seeds.insert(PixelPos::new(0, y));
    }
    for &x in &edges.top {
        seeds.insert(PixelPos::new(x, 0));
    }
    for &y in &edges.right {
        seeds.insert(PixelPos::new(width - 1, y));
    }
    for &x in &edges.bottom {
        seeds.insert(PixelPos::new(x, height - 1));
    }
    seeds
}
