//! `tile` subcommand: flood-fill one image file.

use std::path::PathBuf;

use clap::Args;
use image::Rgba;
use tilefill::coord::PixelPos;
use tilefill::single::fill_image_file;

use crate::commands::common::{parse_color, parse_pixel_pos};
use crate::error::CliError;

/// Arguments for the `tile` subcommand.
#[derive(Debug, Args)]
pub struct TileArgs {
    /// The image file to fill
    #[arg(long, default_value = "example.png")]
    pub file: PathBuf,

    /// Optional output file (defaults to overwriting the input)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// The fill color as R,G,B or R,G,B,A
    #[arg(long, value_parser = parse_color, default_value = "255,0,0,255")]
    pub color: Rgba<u8>,

    /// The pixel position to fill from, as X,Y
    #[arg(long, value_parser = parse_pixel_pos, default_value = "0,0")]
    pub position: PixelPos,
}

/// Run the `tile` subcommand.
pub fn run(args: TileArgs) -> Result<(), CliError> {
    fill_image_file(&args.file, args.out.as_deref(), args.position, args.color)?;
    println!("Filled {} from {}", args.file.display(), args.position);
    Ok(())
}
