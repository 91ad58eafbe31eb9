#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};

pub use error::{Result, TtsError};
pub use server::{Server, TtsServerBuilder};
pub use types::{SpeechDefaults, SpeechRequest, SpeechResponse};
use request::LenientJson;

/// Build the relay core from configuration
pub fn build_server(config: &vox_config::Config) -> Arc<Server> {
    Arc::new(TtsServerBuilder::new(config).build())
}

/// Create the endpoint router for the relay
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/tts", post(synthesize).options(preflight))
}

/// Handle speech synthesis requests
async fn synthesize(
    State(server): State<Arc<Server>>,
    LenientJson(request): LenientJson<types::SpeechRequest>,
) -> Result<axum::response::Response> {
    tracing::debug!("TTS relay handler called");

    let response = server.synthesize(request).await?;

    tracing::debug!("speech synthesis complete");

    Ok(response.into_response())
}

/// Answer preflight before any validation logic runs
///
/// Browsers that send the full preflight header set are short-circuited
/// by the CORS middleware; this route covers bare `OPTIONS` probes so the
/// endpoint contract holds either way.
async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            ("access-control-allow-headers", "Content-Type"),
            ("access-control-allow-methods", "POST, OPTIONS"),
        ],
    )
}
