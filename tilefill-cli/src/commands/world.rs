//! `world` subcommand: distributed flood fill across a tile directory.

use std::path::PathBuf;

use clap::Args;
use image::Rgba;
use tilefill::coord::{PixelPos, TileCoord};
use tilefill::store::TileStore;
use tilefill::world::{fill_world, WorldOptions, DEFAULT_WORKERS};

use crate::commands::common::{parse_color, parse_pixel_pos, parse_tile_coord};
use crate::error::CliError;

/// Arguments for the `world` subcommand.
#[derive(Debug, Args)]
pub struct WorldArgs {
    /// Directory holding the tile_{x}_{y}.png files to fill
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// The fill color as R,G,B or R,G,B,A
    #[arg(long, value_parser = parse_color, default_value = "255,0,0,255")]
    pub color: Rgba<u8>,

    /// Grid position of the starting tile, as X,Y
    #[arg(long = "fp", value_parser = parse_tile_coord, default_value = "0,0")]
    pub file_position: TileCoord,

    /// Pixel position within the starting tile, as X,Y
    #[arg(long = "tp", value_parser = parse_pixel_pos, default_value = "0,0")]
    pub tile_position: PixelPos,

    /// Number of concurrent workers to spawn
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,
}

/// Run the `world` subcommand.
pub async fn run(args: WorldArgs) -> Result<(), CliError> {
    let store = TileStore::new(args.path);
    let options = WorldOptions::default().with_workers(args.workers);
    fill_world(
        store,
        args.file_position,
        args.tile_position,
        args.color,
        options,
    )
    .await?;
    println!(
        "World fill complete from tile {} pixel {}",
        args.file_position, args.tile_position
    );
    Ok(())
}
