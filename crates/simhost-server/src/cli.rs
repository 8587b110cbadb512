use std::path::PathBuf;

use clap::Parser;

/// simhost: serves the device simulator host stylesheets.
#[derive(Parser, Debug, Default)]
#[command(name = "simhost", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Interface to bind.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory of the simulator host UI to serve.
    #[arg(long)]
    pub sim_host: Option<PathBuf>,

    /// Theme JSON file, or inline theme JSON.
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Directory for generated theme stylesheets.
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "simhost",
            "--config",
            "/etc/simhost.toml",
            "--host",
            "0.0.0.0",
            "-p",
            "9000",
            "--sim-host",
            "/srv/sim-host",
            "--theme",
            "{\"default\": {}}",
            "--cache-dir",
            "/tmp/themes",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("/etc/simhost.toml")));
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.sim_host, Some(PathBuf::from("/srv/sim-host")));
        assert_eq!(args.theme.as_deref(), Some("{\"default\": {}}"));
        assert_eq!(args.cache_dir, Some(PathBuf::from("/tmp/themes")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::try_parse_from(["simhost"]).unwrap();
        assert!(args.port.is_none());
        assert!(args.theme.is_none());
    }
}
