//! hypermarch - sphere-traced views of 4D scenes
//!
//! The application layer on top of the workspace crates: configuration,
//! scene construction, command-line arguments and image export.

pub mod cli;
pub mod config;
pub mod output;
pub mod scene;
