//! Local file system storage
//!
//! Handles the destination directory and the files written into it.

pub mod filesystem;

pub use filesystem::{create_directory, create_local_file};
