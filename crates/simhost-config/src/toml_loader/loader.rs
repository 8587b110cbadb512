//! Core TOML config loading: read from path or platform default.

use std::path::Path;

use simhost_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::SimhostConfig;
use crate::validation;

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Validation failures are
/// logged; the caller decides whether to run [`validation::validate`] strictly.
pub fn load_from_path(path: &Path) -> Result<SimhostConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: SimhostConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// If the file does not exist, a documented default file is written and
/// defaults are returned.
pub fn load_default() -> Result<SimhostConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(SimhostConfig::default())
        }
        Err(e) => Err(e),
    }
}
