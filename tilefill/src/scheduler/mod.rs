//! Work scheduling for a world fill.
//!
//! The [`Scheduler`] is the single authority over which tiles still need a
//! fill pass. It owns three pieces of state, shared with no other task:
//!
//! - `pending`: one [`Work`] record per tile position awaiting dispatch;
//!   crossings arriving for a tile that is already pending are merged into
//!   its record in place, so the map never holds two records for one tile.
//! - `todo`: dispatch order over the pending tile positions.
//! - `in_flight`: tile positions currently held by a worker. A tile is never
//!   dispatched while in-flight — this is the sole mechanism keeping two
//!   workers off the same tile file.
//!
//! The run loop arbitrates between handing pending work to an available
//! worker and absorbing a completed [`Border`] report, with no fixed
//! priority between the two. It exits exactly when both `todo` and
//! `in_flight` are empty (quiescence), which closes the dispatch channel
//! and lets the workers drain out.
//!
//! A tile may be re-enqueued after an earlier pass completes if crossings
//! from another neighbor arrive later. This converges: re-filling an
//! already-filled region is a no-op because painted pixels no longer match
//! the source color.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::PathBuf;

use image::Rgba;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::coord::{PixelPos, TileCoord};
use crate::fill::{Border, Edges};
use crate::store::TileStore;

/// How many loop iterations between progress log lines.
const PROGRESS_LOG_INTERVAL: u64 = 10;

/// A schedulable unit: one fill pass over one tile.
///
/// Seeding comes in two forms. The initial work item carries explicit local
/// `pixels`; work propagated from a neighbor carries accumulated per-edge
/// `edges` crossings, which the worker translates into edge pixels once the
/// tile's dimensions are known. The source/target color pair is fixed for
/// the lifetime of a run.
#[derive(Debug, Clone)]
pub struct Work {
    /// Target tile's grid position.
    pub tile: TileCoord,
    /// Backing path of the tile file.
    pub path: PathBuf,
    /// Explicit local seed positions (initial work only).
    pub pixels: HashSet<PixelPos>,
    /// Accumulated edge crossings from neighbors.
    pub edges: Edges,
    /// Color being replaced.
    pub from: Rgba<u8>,
    /// Replacement color.
    pub to: Rgba<u8>,
}

impl Work {
    /// The initial work item, seeded at one explicit pixel.
    pub fn seeded(
        tile: TileCoord,
        path: PathBuf,
        pixel: PixelPos,
        from: Rgba<u8>,
        to: Rgba<u8>,
    ) -> Self {
        Self {
            tile,
            path,
            pixels: HashSet::from([pixel]),
            edges: Edges::default(),
            from,
            to,
        }
    }

    /// An empty propagated work item; crossings are merged in afterwards.
    fn crossings(tile: TileCoord, path: PathBuf, from: Rgba<u8>, to: Rgba<u8>) -> Self {
        Self {
            tile,
            path,
            pixels: HashSet::new(),
            edges: Edges::default(),
            from,
            to,
        }
    }
}

/// Single-owner scheduling state for one world fill run.
pub struct Scheduler {
    store: TileStore,
    from: Rgba<u8>,
    to: Rgba<u8>,
    pending: HashMap<TileCoord, Work>,
    todo: VecDeque<TileCoord>,
    in_flight: HashSet<TileCoord>,
}

impl Scheduler {
    /// Creates a scheduler seeded with the initial work item.
    pub fn new(store: TileStore, initial: Work) -> Self {
        let from = initial.from;
        let to = initial.to;
        let tile = initial.tile;
        let mut pending = HashMap::new();
        pending.insert(tile, initial);
        Self {
            store,
            from,
            to,
            pending,
            todo: VecDeque::from([tile]),
            in_flight: HashSet::new(),
        }
    }

    /// Runs until quiescence: no tile pending and none in-flight.
    ///
    /// Dropping `work_tx` on return closes the dispatch channel, which is
    /// the shutdown signal for the worker pool.
    pub async fn run(mut self, work_tx: mpsc::Sender<Work>, mut result_rx: mpsc::Receiver<Border>) {
        let mut iterations = 0u64;
        while !self.todo.is_empty() || !self.in_flight.is_empty() {
            iterations += 1;
            let can_dispatch = self.rotate_to_dispatchable();
            tokio::select! {
                permit = work_tx.reserve(), if can_dispatch => {
                    let Ok(permit) = permit else {
                        warn!("all workers gone before quiescence, stopping scheduler");
                        break;
                    };
                    if let Some(work) = self.take_front() {
                        debug!(tile = %work.tile, "dispatching tile");
                        permit.send(work);
                    }
                }
                report = result_rx.recv() => {
                    match report {
                        Some(border) => self.absorb(border),
                        None => {
                            warn!("result channel closed before quiescence, stopping scheduler");
                            break;
                        }
                    }
                }
            }
            if iterations % PROGRESS_LOG_INTERVAL == 0 {
                debug!(
                    iterations,
                    todo = self.todo.len(),
                    in_flight = self.in_flight.len(),
                    "scheduler progress"
                );
            }
        }
        info!(iterations, "scheduler reached quiescence");
    }

    /// Rotates `todo` so its front is dispatchable, returning whether any
    /// entry is. A pending tile whose previous pass is still in-flight is
    /// skipped, not dropped; it keeps its place in the cycle.
    fn rotate_to_dispatchable(&mut self) -> bool {
        match self.todo.iter().position(|t| !self.in_flight.contains(t)) {
            Some(idx) => {
                self.todo.rotate_left(idx);
                true
            }
            None => false,
        }
    }

    /// Removes the front todo entry and marks it in-flight.
    fn take_front(&mut self) -> Option<Work> {
        let tile = self.todo.pop_front()?;
        let work = self.pending.remove(&tile);
        debug_assert!(work.is_some(), "todo entry without pending work");
        self.in_flight.insert(tile);
        work
    }

    /// Merges a completed report into pending work for affected neighbors
    /// and clears the reporting tile's in-flight marker.
    fn absorb(&mut self, border: Border) {
        let Border { tile, edges } = border;
        for (dir, crossings) in edges.into_sides() {
            if crossings.is_empty() {
                continue;
            }
            let neighbor = tile.neighbor(dir);
            let arrives_on = dir.opposite();
            let work = self.pending.entry(neighbor).or_insert_with(|| {
                // First crossing for this tile: schedule a new pass.
                self.todo.push_back(neighbor);
                Work::crossings(neighbor, self.store.tile_path(neighbor), self.from, self.to)
            });
            work.edges.extend(arrives_on, crossings);
        }
        self.in_flight.remove(&tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::EdgeDir;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn scheduler_with_seed(tile: TileCoord) -> Scheduler {
        let store = TileStore::new("/world");
        let path = store.tile_path(tile);
        Scheduler::new(
            store,
            Work::seeded(tile, path, PixelPos::new(0, 0), RED, BLUE),
        )
    }

    fn border_with(tile: TileCoord, dir: EdgeDir, coords: &[u32]) -> Border {
        let mut border = Border::empty(tile);
        border.edges.extend(dir, coords.iter().copied());
        border
    }

    #[test]
    fn test_new_holds_exactly_the_seed() {
        let sched = scheduler_with_seed(TileCoord::new(0, 0));
        assert_eq!(sched.todo.len(), 1);
        assert_eq!(sched.pending.len(), 1);
        assert!(sched.in_flight.is_empty());
    }

    #[test]
    fn test_right_crossing_becomes_left_seed_of_right_neighbor() {
        let mut sched = scheduler_with_seed(TileCoord::new(0, 0));
        let work = sched.take_front().unwrap();

        sched.absorb(border_with(work.tile, EdgeDir::Right, &[3]));

        let neighbor = TileCoord::new(1, 0);
        let queued = sched.pending.get(&neighbor).expect("neighbor scheduled");
        assert_eq!(queued.edges.left, vec![3]);
        assert!(queued.pixels.is_empty());
        assert_eq!(queued.path, PathBuf::from("/world/tile_1_0.png"));
        assert!(sched.todo.contains(&neighbor));
        assert!(!sched.in_flight.contains(&work.tile), "report clears in-flight");
    }

    #[test]
    fn test_crossings_coalesce_into_one_pending_record() {
        let mut sched = scheduler_with_seed(TileCoord::new(0, 0));
        sched.take_front();

        // Two different neighbors both cross into tile (1, 1).
        sched.absorb(border_with(TileCoord::new(0, 1), EdgeDir::Right, &[0, 2]));
        sched.absorb(border_with(TileCoord::new(1, 0), EdgeDir::Bottom, &[1]));

        let target = TileCoord::new(1, 1);
        let queued = sched.pending.get(&target).unwrap();
        assert_eq!(queued.edges.left, vec![0, 2]);
        assert_eq!(queued.edges.top, vec![1]);
        assert_eq!(
            sched.todo.iter().filter(|t| **t == target).count(),
            1,
            "a tile position is enqueued at most once"
        );
    }

    #[test]
    fn test_empty_border_only_clears_in_flight() {
        let mut sched = scheduler_with_seed(TileCoord::new(0, 0));
        let work = sched.take_front().unwrap();
        assert!(sched.in_flight.contains(&work.tile));

        sched.absorb(Border::empty(work.tile));

        assert!(sched.pending.is_empty());
        assert!(sched.todo.is_empty());
        assert!(sched.in_flight.is_empty());
    }

    #[test]
    fn test_in_flight_tile_is_not_dispatchable() {
        let mut sched = scheduler_with_seed(TileCoord::new(0, 0));
        let work = sched.take_front().unwrap();

        // A neighbor reports crossings back into the in-flight tile.
        sched.absorb(border_with(TileCoord::new(1, 0), EdgeDir::Left, &[2]));

        assert!(sched.todo.contains(&work.tile));
        assert!(sched.in_flight.contains(&work.tile));
        assert!(
            !sched.rotate_to_dispatchable(),
            "sole todo entry is in-flight, nothing to dispatch"
        );

        sched.in_flight.remove(&work.tile);
        assert!(sched.rotate_to_dispatchable());
    }

    #[test]
    fn test_rotation_preserves_skipped_entries() {
        let mut sched = scheduler_with_seed(TileCoord::new(0, 0));
        sched.take_front();

        sched.absorb(border_with(TileCoord::new(1, 0), EdgeDir::Left, &[0]));
        sched.absorb(border_with(TileCoord::new(1, 1), EdgeDir::Left, &[0]));
        // todo now: [(0,0), (0,1)]; block the first.
        sched.in_flight.insert(TileCoord::new(0, 0));

        assert!(sched.rotate_to_dispatchable());
        assert_eq!(sched.todo.front(), Some(&TileCoord::new(0, 1)));
        assert_eq!(sched.todo.len(), 2, "skipped entry stays queued");
    }

    #[tokio::test]
    async fn test_run_reaches_quiescence_and_closes_dispatch() {
        let sched = scheduler_with_seed(TileCoord::new(0, 0));
        let (work_tx, mut work_rx) = mpsc::channel::<Work>(1);
        let (result_tx, result_rx) = mpsc::channel::<Border>(1);

        let handle = tokio::spawn(sched.run(work_tx, result_rx));

        // Fake worker: first pass reports a right crossing, later passes
        // report nothing (the region is already filled).
        let mut first = true;
        while let Some(work) = work_rx.recv().await {
            let report = if first {
                first = false;
                border_with(work.tile, EdgeDir::Right, &[1])
            } else {
                Border::empty(work.tile)
            };
            result_tx.send(report).await.unwrap();
        }

        handle.await.unwrap();
    }
}
