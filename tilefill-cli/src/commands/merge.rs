//! `merge` subcommand: stitch a tile grid back into one image.

use std::path::PathBuf;

use clap::Args;
use tilefill::grid::merge_tiles;

use crate::error::CliError;

/// Arguments for the `merge` subcommand.
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Directory holding the tile files to merge
    #[arg(long)]
    pub path: PathBuf,

    /// The output image file
    #[arg(long)]
    pub out: PathBuf,

    /// How many columns of tiles to merge
    #[arg(short = 'c', long = "cols", default_value_t = 10)]
    pub cols: u32,

    /// How many rows of tiles to merge
    #[arg(short = 'r', long = "rows", default_value_t = 10)]
    pub rows: u32,
}

/// Run the `merge` subcommand.
pub fn run(args: MergeArgs) -> Result<(), CliError> {
    merge_tiles(&args.path, &args.out, args.cols, args.rows)?;
    println!(
        "Merged {}x{} tiles from {} into {}",
        args.cols,
        args.rows,
        args.path.display(),
        args.out.display()
    );
    Ok(())
}
