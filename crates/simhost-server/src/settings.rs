//! Config file loading and command-line overrides.

use simhost_common::ConfigError;
use simhost_config::SimhostConfig;

use crate::cli::Args;

/// Default log directive when nothing else is configured.
pub const DEFAULT_LOG_DIRECTIVE: &str = "simhost=info";

/// Load the config file named on the command line, or the platform default.
pub fn load(args: &Args) -> Result<SimhostConfig, ConfigError> {
    match &args.config {
        Some(path) => simhost_config::load_from_path(path),
        None => simhost_config::load_default(),
    }
}

/// Apply command-line flags on top of the file config.
pub fn apply_overrides(mut config: SimhostConfig, args: &Args) -> SimhostConfig {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(root) = &args.sim_host {
        config.sim_host.root = Some(root.clone());
    }
    if let Some(theme) = &args.theme {
        config.theme.source = Some(theme.clone());
    }
    if let Some(cache_dir) = &args.cache_dir {
        config.theme.cache_dir = Some(cache_dir.clone());
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    config
}

/// Tracing filter directive for a level name such as `debug`.
///
/// A value that already looks like a directive (`target=level`) is used as is.
pub fn log_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("simhost={level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn flags_override_file_values() {
        let args = Args {
            port: Some(9001),
            theme: Some("dark.json".into()),
            sim_host: Some(PathBuf::from("/srv/host")),
            ..Default::default()
        };
        let config = apply_overrides(SimhostConfig::default(), &args);
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.theme.source.as_deref(), Some("dark.json"));
        assert_eq!(config.sim_host.root, Some(PathBuf::from("/srv/host")));
        assert!(config.theme.cache_dir.is_none());
    }

    #[test]
    fn no_flags_keep_config() {
        let mut file = SimhostConfig::default();
        file.server.port = 7000;
        file.logging.level = "warn".into();
        let config = apply_overrides(file, &Args::default());
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn load_uses_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simhost.toml");
        std::fs::write(&path, "[server]\nport = 8123\n").unwrap();

        let args = Args {
            config: Some(path),
            ..Default::default()
        };
        assert_eq!(load(&args).unwrap().server.port, 8123);
    }

    #[test]
    fn load_missing_explicit_path_is_error() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/simhost.toml")),
            ..Default::default()
        };
        assert!(matches!(load(&args), Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn log_directive_wraps_plain_levels() {
        assert_eq!(log_directive("debug"), "simhost=debug");
        assert_eq!(log_directive("simhost_theme=trace"), "simhost_theme=trace");
    }
}
