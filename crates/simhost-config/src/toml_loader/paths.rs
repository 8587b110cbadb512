//! Default config location and first-run template.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use simhost_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// `config.toml` inside the platform config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    simhost_platform::config_file().map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Write the commented template to `path`, creating parent directories.
///
/// An existing file is left untouched.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_error = |action: &str, target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {action} {}: {e}", target.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create", parent, e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(()),
        Err(e) => return Err(io_error("create", path, e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_error("write", path, e))?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
