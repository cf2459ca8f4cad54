//! Grid utilities: split one raster into tiles, merge tiles back.
//!
//! Pure slicing and stitching around the tile storage convention
//! (`tile_{x}_{y}.png`); no flood-fill logic. All tiles of a grid share one
//! width/height, derived from the source dimensions on split and from
//! `tile_0_0.png` on merge.

use std::fs;
use std::path::{Path, PathBuf};

use image::{imageops, ImageFormat, RgbaImage};
use thiserror::Error;
use tracing::debug;

use crate::coord::TileCoord;
use crate::store::tile_file_name;

/// Errors from grid split/merge.
#[derive(Debug, Error)]
pub enum GridError {
    /// Grid dimensions must be nonzero and no larger than the source.
    #[error("invalid grid: {cols} columns x {rows} rows over a {width}x{height} image")]
    InvalidGrid {
        cols: u32,
        rows: u32,
        width: u32,
        height: u32,
    },

    /// A raster could not be opened or decoded.
    #[error("failed to load image {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        source: image::ImageError,
    },

    /// A raster could not be encoded or written.
    #[error("failed to save image {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The output directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn load_rgba(path: &Path) -> Result<RgbaImage, GridError> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| GridError::Load {
            path: path.to_path_buf(),
            source,
        })
}

fn save_png(path: &Path, image: &RgbaImage) -> Result<(), GridError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| GridError::Save {
            path: path.to_path_buf(),
            source,
        })
}

/// Splits `file` into a `cols` x `rows` grid of equal tiles under `out_dir`.
///
/// Tile size is the source size divided by the grid; a remainder of pixels
/// on the right/bottom is dropped, matching integer division.
pub fn split_image(file: &Path, out_dir: &Path, cols: u32, rows: u32) -> Result<(), GridError> {
    let source = load_rgba(file)?;
    let (width, height) = source.dimensions();
    let (tile_w, tile_h) = (
        width.checked_div(cols).unwrap_or(0),
        height.checked_div(rows).unwrap_or(0),
    );
    if tile_w == 0 || tile_h == 0 {
        return Err(GridError::InvalidGrid {
            cols,
            rows,
            width,
            height,
        });
    }

    fs::create_dir_all(out_dir).map_err(|source| GridError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    for x in 0..cols {
        for y in 0..rows {
            let tile =
                imageops::crop_imm(&source, x * tile_w, y * tile_h, tile_w, tile_h).to_image();
            let path = out_dir.join(tile_file_name(TileCoord::new(x as i32, y as i32)));
            save_png(&path, &tile)?;
        }
    }
    debug!(cols, rows, tile_w, tile_h, "split complete");
    Ok(())
}

/// Merges a `cols` x `rows` grid of tiles under `dir` into `out_file`.
///
/// Tile dimensions are taken from `tile_0_0.png`; every tile of the grid
/// must exist and share them.
pub fn merge_tiles(dir: &Path, out_file: &Path, cols: u32, rows: u32) -> Result<(), GridError> {
    if cols == 0 || rows == 0 {
        return Err(GridError::InvalidGrid {
            cols,
            rows,
            width: 0,
            height: 0,
        });
    }

    let first = load_rgba(&dir.join(tile_file_name(TileCoord::new(0, 0))))?;
    let (tile_w, tile_h) = first.dimensions();
    let mut canvas = RgbaImage::new(tile_w * cols, tile_h * rows);

    for x in 0..cols {
        for y in 0..rows {
            let tile = if (x, y) == (0, 0) {
                first.clone()
            } else {
                load_rgba(&dir.join(tile_file_name(TileCoord::new(x as i32, y as i32))))?
            };
            imageops::replace(
                &mut canvas,
                &tile,
                (x * tile_w) as i64,
                (y * tile_h) as i64,
            );
        }
    }

    save_png(out_file, &canvas)?;
    debug!(cols, rows, tile_w, tile_h, "merge complete");
    Ok(())
}
