//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific directory for saved replay logs
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/hexwarden/replays`
/// - Linux: `~/.local/share/hexwarden/replays` (or `$XDG_DATA_HOME/hexwarden/replays`)
/// - Windows: `%APPDATA%\hexwarden\replays`
/// - Fallback: `./save_data/replays`
pub fn replay_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hexwarden")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
        .join("replays")
}
