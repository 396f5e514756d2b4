//! RAX FTP Mirror
//!
//! Copies every file of one directory on an FTP server into a local directory.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod mirror;
pub mod protocol;
pub mod storage;
pub mod utils;

pub use client::{ConnectionTarget, TransferClient};
pub use mirror::{JobPaths, MirrorJob};
