//! Error handling
//!
//! Defines error types and handling for the mirror utility.

pub mod handlers;
pub mod types;

pub use types::*;
