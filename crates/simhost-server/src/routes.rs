//! HTTP routes.

use std::borrow::Cow;
use std::io;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use bytes::Bytes;
use futures_util::stream;
use simhost_delivery::{transform_for_request, transform_stream};
use tokio_util::io::ReaderStream;
use tracing::{debug, warn};

use crate::state::ServerState;

/// Stylesheet served for the built-in host.
pub const BUNDLED_STYLESHEET: &str = include_str!("../../../assets/sim-host/sim-host.css");

const TEXT_CSS: &str = "text/css; charset=utf-8";

pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/simulator/sim-host.css", get(sim_host_css))
        .route("/simulator/theme.css", get(theme_css))
        .with_state(state)
}

/// The host stylesheet, rewritten for the requesting browser.
async fn sim_host_css(State(state): State<Arc<ServerState>>, headers: HeaderMap) -> Response {
    let raw_user_agent = user_agent(&headers);
    let user_agent = raw_user_agent.as_deref();
    let pipeline = transform_for_request(user_agent, &state.variables());

    let body = match state.host.stylesheet_path() {
        None => {
            let bundled = stream::iter([Ok::<_, io::Error>(Bytes::from_static(
                BUNDLED_STYLESHEET.as_bytes(),
            ))]);
            Body::from_stream(transform_stream(bundled, pipeline))
        }
        Some(path) => match tokio::fs::File::open(&path).await {
            Ok(file) => Body::from_stream(transform_stream(ReaderStream::new(file), pipeline)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "sim host stylesheet unavailable");
                return StatusCode::NOT_FOUND.into_response();
            }
        },
    };

    debug!(user_agent = user_agent.unwrap_or("-"), "serving sim-host.css");
    ([(header::CONTENT_TYPE, TEXT_CSS)], body).into_response()
}

/// The User-Agent header as text. Bytes outside visible ASCII are decoded
/// lossily rather than discarding the whole header.
fn user_agent(headers: &HeaderMap) -> Option<Cow<'_, str>> {
    headers
        .get(header::USER_AGENT)
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
}

/// The generated theme stylesheet.
async fn theme_css(State(state): State<Arc<ServerState>>) -> Response {
    let Some(path) = &state.theme_css else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::File::open(path).await {
        Ok(file) => (
            [(header::CONTENT_TYPE, TEXT_CSS)],
            Body::from_stream(ReaderStream::new(file)),
        )
            .into_response(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "theme stylesheet unavailable");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
