//! TileFill CLI - paint images with a color.
//!
//! Subcommands mirror the library's surfaces:
//! - `tile`  - flood-fill one image file
//! - `world` - distributed flood fill across a directory of tiles
//! - `split` - slice one image into a tile grid
//! - `merge` - stitch a tile grid back into one image

use clap::{Parser, Subcommand};
use tilefill::logging::{init_logging, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE};

mod commands;
mod error;

use commands::{merge, split, tile, world};

#[derive(Parser)]
#[command(name = "tilefill")]
#[command(about = "Paint connected regions of images with a color", version = tilefill::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flood-fill a single image file from a pixel position
    Tile(tile::TileArgs),
    /// Flood-fill a world of tiles, propagating across tile boundaries
    World(world::WorldArgs),
    /// Split one image into an n x m grid of tile files
    Split(split::SplitArgs),
    /// Merge an n x m grid of tile files into one image
    Merge(merge::MergeArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let _guard = match init_logging(DEFAULT_LOG_DIR, DEFAULT_LOG_FILE) {
        Ok(guard) => guard,
        Err(err) => error::CliError::LoggingInit(err.to_string()).exit(),
    };

    let result = match cli.command {
        Commands::Tile(args) => tile::run(args),
        Commands::World(args) => world::run(args).await,
        Commands::Split(args) => split::run(args),
        Commands::Merge(args) => merge::run(args),
    };

    if let Err(err) = result {
        err.exit();
    }
}
