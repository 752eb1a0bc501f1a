//! Quest-variable table loader.
//!
//! The file is a flat TOML table of integers:
//!
//! ```toml
//! spd = 55
//! door_open = 1
//! ```

use std::path::Path;

use script_core::env::QuestVarSnapshot;

use crate::loaders::{LoadResult, read_file};

/// Loader for quest-variable tables from TOML files.
pub struct QuestVarLoader;

impl QuestVarLoader {
    /// Load quest variables from a TOML file.
    pub fn load(path: &Path) -> LoadResult<QuestVarSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse quest variables from TOML text.
    pub fn parse(content: &str) -> LoadResult<QuestVarSnapshot> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse quest vars TOML: {}", e))
    }
}
