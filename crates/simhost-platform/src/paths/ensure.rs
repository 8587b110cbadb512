use std::fs;
use std::path::Path;

use simhost_common::PlatformError;

use super::resolve::{config_dir, data_dir};

/// Creates the config and data directories plus `cache_dir` if missing.
pub fn ensure_dirs(cache_dir: &Path) -> Result<(), PlatformError> {
    fs::create_dir_all(config_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(data_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(cache_dir).map_err(|e| {
        PlatformError::PathError(format!("{}: {e}", cache_dir.display()))
    })?;
    tracing::debug!(cache_dir = %cache_dir.display(), "ensured directories");
    Ok(())
}
