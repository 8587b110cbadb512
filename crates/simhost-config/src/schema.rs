//! Configuration schema: one struct per TOML section.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimhostConfig {
    pub server: ServerConfig,
    pub sim_host: SimHostConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
        }
    }
}

/// Which simulator host UI to serve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimHostConfig {
    /// Directory of an on-disk sim host. `None` serves the built-in host.
    pub root: Option<PathBuf>,
}

/// Theme selection and generated-stylesheet cache.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Path to a theme JSON file, or inline JSON text.
    pub source: Option<String>,
    /// Where generated theme stylesheets are written. Defaults to the
    /// application-data `themes` directory.
    pub cache_dir: Option<PathBuf>,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for simhost crates (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
