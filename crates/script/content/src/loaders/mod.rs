//! Content loaders for reading world data from files.
//!
//! Each loader turns one RON/TOML file into a snapshot oracle.

pub mod factory;
pub mod qvars;
pub mod world;

pub use factory::ContentFactory;
pub use qvars::QuestVarLoader;
pub use world::WorldLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
