//! Tile storage: one PNG file per world grid cell.
//!
//! Tiles are named deterministically as `tile_{x}_{y}.png` under a base
//! directory. Loads decode the whole raster into an [`RgbaImage`]; saves are
//! whole-buffer overwrites of the same path — there are no partial writes.
//! Decode and encode run on the blocking thread pool so tile I/O never
//! stalls the async runtime.

use std::path::PathBuf;

use image::{ImageFormat, RgbaImage};
use thiserror::Error;
use tokio::task;

use crate::coord::TileCoord;

/// Errors from tile load/persist operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The tile file could not be opened or decoded.
    #[error("failed to load tile {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The tile file could not be encoded or written back.
    #[error("failed to save tile {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The blocking I/O task was aborted or panicked.
    #[error("tile I/O task failed: {0}")]
    Join(#[from] task::JoinError),
}

/// File name for the tile at a grid position.
pub fn tile_file_name(tile: TileCoord) -> String {
    format!("tile_{}_{}.png", tile.x, tile.y)
}

/// Access to the tile files of one world.
///
/// Cloning is cheap; every worker holds its own handle. Concurrent access to
/// one tile file is prevented by the scheduler (a tile is never dispatched
/// while in-flight), not by the store.
#[derive(Debug, Clone)]
pub struct TileStore {
    base: PathBuf,
}

impl TileStore {
    /// Creates a store rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The backing path of the tile at a grid position.
    pub fn tile_path(&self, tile: TileCoord) -> PathBuf {
        self.base.join(tile_file_name(tile))
    }

    /// Loads and decodes one tile into an RGBA buffer.
    pub async fn load(&self, tile: TileCoord) -> Result<RgbaImage, StoreError> {
        load_image(self.tile_path(tile)).await
    }

    /// Persists one tile as a whole-buffer PNG overwrite.
    pub async fn save(&self, tile: TileCoord, image: RgbaImage) -> Result<(), StoreError> {
        save_png(self.tile_path(tile), image).await
    }
}

/// Decodes the raster at `path` into an RGBA buffer on the blocking pool.
pub async fn load_image(path: PathBuf) -> Result<RgbaImage, StoreError> {
    task::spawn_blocking(move || match image::open(&path) {
        Ok(img) => Ok(img.to_rgba8()),
        Err(source) => Err(StoreError::Load { path, source }),
    })
    .await?
}

/// Encodes `image` as PNG and overwrites `path` on the blocking pool.
pub async fn save_png(path: PathBuf, image: RgbaImage) -> Result<(), StoreError> {
    task::spawn_blocking(move || {
        image
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| StoreError::Save { path, source })
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    #[test]
    fn test_tile_file_naming() {
        assert_eq!(tile_file_name(TileCoord::new(0, 0)), "tile_0_0.png");
        assert_eq!(tile_file_name(TileCoord::new(-1, 12)), "tile_-1_12.png");
    }

    #[test]
    fn test_tile_path_joins_base_directory() {
        let store = TileStore::new("/world");
        assert_eq!(
            store.tile_path(TileCoord::new(2, 3)),
            PathBuf::from("/world/tile_2_3.png")
        );
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = TileStore::new(dir.path());
        let tile = TileCoord::new(1, 1);

        let mut img = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        img.put_pixel(2, 1, Rgba([1, 2, 3, 4]));

        store.save(tile, img.clone()).await.unwrap();
        let loaded = store.load(tile).await.unwrap();
        assert_eq!(loaded, img);
    }

    #[tokio::test]
    async fn test_load_missing_tile_reports_path() {
        let dir = TempDir::new().unwrap();
        let store = TileStore::new(dir.path());

        let err = store.load(TileCoord::new(9, 9)).await.unwrap_err();
        match err {
            StoreError::Load { path, .. } => {
                assert!(path.ends_with("tile_9_9.png"));
            }
            other => panic!("expected load error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_tile() {
        let dir = TempDir::new().unwrap();
        let store = TileStore::new(dir.path());
        let tile = TileCoord::new(0, 0);

        let red = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        let blue = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 255]));
        store.save(tile, red).await.unwrap();
        store.save(tile, blue.clone()).await.unwrap();

        assert_eq!(store.load(tile).await.unwrap(), blue);
    }
}
