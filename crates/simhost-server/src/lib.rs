//! HTTP front end for the simulator host stylesheets.

pub mod cli;
pub mod routes;
pub mod settings;
pub mod state;

use std::sync::Arc;

use simhost_common::SimHostError;
use simhost_config::SimhostConfig;
use tokio::net::TcpListener;

pub use routes::router;
pub use state::ServerState;

/// Validate `config`, prepare the theme, and serve until the listener fails.
pub async fn run(config: SimhostConfig) -> Result<(), SimHostError> {
    simhost_config::validate(&config)?;

    let state = ServerState::from_config(&config).await?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("simhost listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(Arc::new(state)))
        .await
        .map_err(|e| SimHostError::Server(e.to_string()))
}
