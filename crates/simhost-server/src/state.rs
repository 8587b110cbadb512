//! Startup preparation and shared request state.

use std::path::PathBuf;

use simhost_common::{SimHostError, ThemeProperties};
use simhost_config::SimhostConfig;
use simhost_delivery::{builtin_variables, CssVariableTable};
use simhost_theme::{SimHost, ThemeInput, ThemeResolver};
use tracing::info;

/// Everything request handlers need, computed once at startup.
#[derive(Debug)]
pub struct ServerState {
    pub host: SimHost,
    /// Generated theme stylesheet; `None` when the host has no theme support.
    pub theme_css: Option<PathBuf>,
    /// Immutable built-in variable values.
    pub builtin_variables: ThemeProperties,
}

impl ServerState {
    /// Load the host schema and resolve the configured theme into the cache.
    pub async fn prepare(
        host: SimHost,
        theme: ThemeInput,
        cache_dir: PathBuf,
    ) -> Result<Self, SimHostError> {
        let schema = host.load_schema().await?;
        let resolver = ThemeResolver::new(cache_dir);
        let theme_css = resolver.resolve(schema.as_deref(), theme).await?;

        if let Some(path) = &theme_css {
            info!(path = %path.display(), "theme stylesheet ready");
        }

        Ok(Self {
            host,
            theme_css,
            builtin_variables: builtin_variables(),
        })
    }

    /// Prepare state from a loaded config, creating the cache directory.
    pub async fn from_config(config: &SimhostConfig) -> Result<Self, SimHostError> {
        let cache_dir = match &config.theme.cache_dir {
            Some(dir) => dir.clone(),
            None => simhost_platform::theme_cache_dir()?,
        };
        simhost_platform::ensure_dirs(&cache_dir)?;

        let host = SimHost::from_root(config.sim_host.root.clone());
        let theme = ThemeInput::from_arg(config.theme.source.as_deref());
        Self::prepare(host, theme, cache_dir).await
    }

    /// Variable values for one request. No per-request customisation exists
    /// yet, so this is the built-in table fully resolved.
    pub fn variables(&self) -> CssVariableTable {
        CssVariableTable::resolve(&self.builtin_variables, None)
    }
}
