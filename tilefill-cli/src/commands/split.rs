//! `split` subcommand: slice one image into a tile grid.

use std::path::PathBuf;

use clap::Args;
use tilefill::grid::split_image;

use crate::error::CliError;

/// Arguments for the `split` subcommand.
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// The image file to split
    #[arg(long)]
    pub file: PathBuf,

    /// The output directory for the tile files
    #[arg(long)]
    pub out: PathBuf,

    /// How many columns of tiles to produce
    #[arg(short = 'c', long = "cols", default_value_t = 10)]
    pub cols: u32,

    /// How many rows of tiles to produce
    #[arg(short = 'r', long = "rows", default_value_t = 10)]
    pub rows: u32,
}

/// Run the `split` subcommand.
pub fn run(args: SplitArgs) -> Result<(), CliError> {
    split_image(&args.file, &args.out, args.cols, args.rows)?;
    println!(
        "Split {} into {}x{} tiles under {}",
        args.file.display(),
        args.cols,
        args.rows,
        args.out.display()
    );
    Ok(())
}
