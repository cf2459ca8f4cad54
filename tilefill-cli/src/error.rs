//! CLI error handling with user-friendly messages.
//!
//! Centralizes error formatting and exit codes for all subcommands.

use std::fmt;
use std::process;

use tilefill::grid::GridError;
use tilefill::single::SingleFillError;
use tilefill::world::WorldError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Single-image fill failed
    Tile(SingleFillError),
    /// World fill failed
    World(WorldError),
    /// Split or merge failed
    Grid(GridError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::World(WorldError::StartTile { .. }) = self {
            eprintln!();
            eprintln!("The starting tile must exist and decode before a fill can begin.");
            eprintln!("Check --path and --fp against the tile_{{x}}_{{y}}.png files on disk.");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Tile(e) => write!(f, "Tile fill failed: {}", e),
            CliError::World(e) => write!(f, "World fill failed: {}", e),
            CliError::Grid(e) => write!(f, "{}", e),
        }
    }
}

impl From<SingleFillError> for CliError {
    fn from(err: SingleFillError) -> Self {
        CliError::Tile(err)
    }
}

impl From<WorldError> for CliError {
    fn from(err: WorldError) -> Self {
        CliError::World(err)
    }
}

impl From<GridError> for CliError {
    fn from(err: GridError) -> Self {
        CliError::Grid(err)
    }
}
