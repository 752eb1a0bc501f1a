//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific data directory for script-cli
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/script-cli`
/// - Linux: `~/.local/share/script-cli` (or `$XDG_DATA_HOME/script-cli`)
/// - Windows: `%APPDATA%\script-cli`
/// - Fallback: `./data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "script-cli")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}
