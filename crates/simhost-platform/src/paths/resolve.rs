use std::path::PathBuf;

use simhost_common::PlatformError;

pub(super) const APP_NAME: &str = "simhost";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/simhost`
/// - Linux: `$XDG_CONFIG_HOME/simhost` (defaults to `~/.config/simhost`)
/// - Windows: `%APPDATA%\simhost`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the application-data directory.
///
/// - macOS: `~/Library/Application Support/simhost`
/// - Linux: `$XDG_DATA_HOME/simhost` (defaults to `~/.local/share/simhost`)
/// - Windows: `%APPDATA%\simhost`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the directory holding generated theme stylesheets.
///
/// Located at `data_dir()/themes`.
pub fn theme_cache_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("themes"))
}

/// Returns the path to the main configuration file.
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}
