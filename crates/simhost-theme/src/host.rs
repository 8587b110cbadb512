//! Simulator host selection.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use simhost_common::ThemeError;

use crate::schema::{DefaultSchema, FileSchema, ThemeSchema};

/// Schema file a host directory must contain to support themes.
pub const SCHEMA_FILE: &str = "theme.json";

/// The host's main stylesheet, served through the delivery filter.
pub const STYLESHEET_FILE: &str = "sim-host.css";

/// The simulator host UI being served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimHost {
    /// The UI bundled with this binary.
    Builtin,
    /// A host UI rooted at a directory.
    Directory(PathBuf),
}

impl SimHost {
    pub fn from_root(root: Option<PathBuf>) -> Self {
        match root {
            Some(root) => Self::Directory(root),
            None => Self::Builtin,
        }
    }

    /// Load the host's theme schema. `Ok(None)` means the host does not
    /// support themes.
    pub async fn load_schema(&self) -> Result<Option<Arc<dyn ThemeSchema>>, ThemeError> {
        match self {
            Self::Builtin => Ok(Some(Arc::new(DefaultSchema::new()))),
            Self::Directory(root) => {
                let path = root.join(SCHEMA_FILE);
                let is_file = tokio::fs::metadata(&path)
                    .await
                    .is_ok_and(|meta| meta.is_file());
                if !is_file {
                    tracing::info!(root = %root.display(), "sim host has no {SCHEMA_FILE}");
                    return Ok(None);
                }
                Ok(Some(Arc::new(FileSchema::load(&path).await?)))
            }
        }
    }

    /// Path of the host stylesheet on disk; `None` for the built-in host.
    pub fn stylesheet_path(&self) -> Option<PathBuf> {
        match self {
            Self::Builtin => None,
            Self::Directory(root) => Some(root.join(STYLESHEET_FILE)),
        }
    }

    pub fn root(&self) -> Option<&Path> {
        match self {
            Self::Builtin => None,
            Self::Directory(root) => Some(root),
        }
    }
}
