//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and a `run`
//! handler; [`common`] holds the shared color/coordinate flag parsers.

pub mod common;
pub mod merge;
pub mod split;
pub mod tile;
pub mod world;
