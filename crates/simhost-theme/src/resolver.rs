//! Content-addressed theme stylesheet cache.
//!
//! Generated stylesheets are named `<schema hash>[-<override hash>].css`.
//! A file that already exists under its name is trusted and never rewritten;
//! nothing is evicted.

use std::path::{Path, PathBuf};

use simhost_common::ThemeError;
use tracing::{debug, info};

use crate::css::generate_css;
use crate::hash::content_hash;
use crate::input::{ThemeInput, ThemeOverride};
use crate::schema::ThemeSchema;

/// Resolves themes to cached stylesheet files.
#[derive(Debug, Clone)]
pub struct ThemeResolver {
    cache_dir: PathBuf,
}

impl ThemeResolver {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Cache path for `schema` with an optional override.
    pub fn artifact_path(&self, schema: &dyn ThemeSchema, theme: Option<&ThemeOverride>) -> PathBuf {
        let mut name = content_hash(&schema.fingerprint());
        if let Some(theme) = theme {
            name.push('-');
            name.push_str(&theme.hash());
        }
        self.cache_dir.join(format!("{name}.css"))
    }

    /// Resolve `input` against the host schema and return the stylesheet
    /// path. `Ok(None)` when the host has no schema.
    ///
    /// Invalid theme input is logged and replaced by the defaults; only
    /// cache write failures are errors.
    pub async fn resolve(
        &self,
        schema: Option<&dyn ThemeSchema>,
        input: ThemeInput,
    ) -> Result<Option<PathBuf>, ThemeError> {
        let Some(schema) = schema else {
            info!("sim host does not support themes");
            return Ok(None);
        };

        let theme = input.load().await;
        self.resolve_override(schema, theme.as_ref()).await.map(Some)
    }

    /// Write the stylesheet for an already-parsed override unless its cache
    /// file exists.
    pub async fn resolve_override(
        &self,
        schema: &dyn ThemeSchema,
        theme: Option<&ThemeOverride>,
    ) -> Result<PathBuf, ThemeError> {
        let path = self.artifact_path(schema, theme);

        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            debug!(path = %path.display(), "theme stylesheet cached");
            return Ok(path);
        }

        let css = generate_css(schema, theme.map(ThemeOverride::properties));
        tokio::fs::write(&path, css)
            .await
            .map_err(|source| ThemeError::CacheWrite {
                path: path.clone(),
                source,
            })?;

        info!(path = %path.display(), "generated theme stylesheet");
        Ok(path)
    }
}
