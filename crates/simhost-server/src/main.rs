use simhost_config::SimhostConfig;
use simhost_server::{cli, settings};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::parse();

    // Read the config before logging starts so its level can apply.
    let loaded = settings::load(&args);
    let level = args
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.logging.level.clone()));
    let directive = level
        .as_deref()
        .map(settings::log_directive)
        .unwrap_or_else(|| settings::DEFAULT_LOG_DIRECTIVE.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::try_new(&directive)
                    .unwrap_or_else(|_| EnvFilter::new(settings::DEFAULT_LOG_DIRECTIVE))
            }),
        )
        .init();

    tracing::info!("simhost v{} starting", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        SimhostConfig::default()
    });
    let config = settings::apply_overrides(config, &args);

    if let Err(e) = simhost_server::run(config).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
