//! Single-image flood fill.
//!
//! The one-file counterpart of the world fill: no scheduler, no workers,
//! just one load → fill → save cycle reusing the plane fill. The image is
//! re-encoded in its source format (PNG, JPEG or GIF), optionally to a
//! separate output path.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgba};
use thiserror::Error;
use tracing::info;

use crate::color::rgb_eq;
use crate::coord::PixelPos;
use crate::fill::plane_fill;

/// Errors from the single-image fill.
#[derive(Debug, Error)]
pub enum SingleFillError {
    /// The input file could not be opened or decoded.
    #[error("failed to load image {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The input's format cannot be determined or re-encoded.
    #[error("unsupported image format for {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The seed pixel lies outside the image.
    #[error("seed pixel {pixel} is outside the {width}x{height} image")]
    SeedOutOfBounds {
        pixel: PixelPos,
        width: u32,
        height: u32,
    },

    /// The result could not be encoded or written.
    #[error("failed to save image {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Flood-fills one raster file in place (or into `output`).
///
/// Reads the seed pixel's color as the source color; if it already
/// RGB-matches `to` the file is left untouched and no output is written.
pub fn fill_image_file(
    input: &Path,
    output: Option<&Path>,
    pixel: PixelPos,
    to: Rgba<u8>,
) -> Result<(), SingleFillError> {
    let format = ImageFormat::from_path(input).map_err(|_| SingleFillError::UnsupportedFormat {
        path: input.to_path_buf(),
    })?;
    if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Gif) {
        return Err(SingleFillError::UnsupportedFormat {
            path: input.to_path_buf(),
        });
    }

    let mut image = image::open(input)
        .map_err(|source| SingleFillError::Load {
            path: input.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (width, height) = image.dimensions();
    if pixel.x >= width || pixel.y >= height {
        return Err(SingleFillError::SeedOutOfBounds {
            pixel,
            width,
            height,
        });
    }

    let from = *image.get_pixel(pixel.x, pixel.y);
    if rgb_eq(from, to) {
        info!(pixel = %pixel, "seed already matches target color, nothing to fill");
        return Ok(());
    }

    plane_fill(&mut image, [pixel], from, to);

    let out = output.unwrap_or(input);
    let result = match format {
        // JPEG has no alpha channel; drop it before re-encoding.
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(image)
            .to_rgb8()
            .save_with_format(out, format),
        _ => image.save_with_format(out, format),
    };
    result.map_err(|source| SingleFillError::Save {
        path: out.to_path_buf(),
        source,
    })
}
