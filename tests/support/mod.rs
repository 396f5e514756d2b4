//! Shared helpers for the integration tests.
#![allow(dead_code)]

pub mod commands;
pub mod filesystem;

pub use filesystem::FakeFileSystem;
pub use server::{FakeFtpServer, FakeServerOptions};

pub const FILE_ONE: &str = "{\"id\":\"1\",\"approvedSymbol\":\"AAA\"}";
pub const FILE_TWO: &str = "{\"id\":\"2\",\"approvedSymbol\":\"BBB\"}";

/// `/pub/data` with two JSON files and a nested directory between them
pub fn data_tree() -> FakeFileSystem {
    let mut fs = FakeFileSystem::new();
    fs.add_directory("/pub")
        .add_directory("/pub/data")
        .add_file("/pub/data/file_one.json", FILE_ONE.as_bytes())
        .add_directory("/pub/data/nested")
        .add_file("/pub/data/nested/deep.json", b"{}")
        .add_file("/pub/data/file_two.json", FILE_TWO.as_bytes());
    fs
}
