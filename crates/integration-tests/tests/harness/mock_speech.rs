//! Mock speech upstream for integration tests
//!
//! Implements the minimal `text-to-speech/{voice_id}` surface with canned
//! behavior, recording what the relay actually sent.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Router, routing};
use bytes::Bytes;
use tokio_util::sync::CancellationToken;

/// Canned behavior for the mock upstream
enum Behavior {
    /// Return 200 with these bytes as `audio/mpeg`
    Audio(Bytes),
    /// Return the given status with a JSON body
    Error { status: u16, body: String },
    /// Never answer (for timeout tests)
    Hang,
}

/// Mock speech upstream that records requests
pub struct MockSpeech {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockSpeechState>,
}

struct MockSpeechState {
    request_count: AtomicU32,
    last_voice: Mutex<Option<String>>,
    last_body: Mutex<Option<serde_json::Value>>,
    behavior: Behavior,
}

impl MockSpeech {
    /// Start a mock that answers every request with the given audio bytes
    pub async fn start_with_audio(audio: &[u8]) -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Audio(Bytes::copy_from_slice(audio))).await
    }

    /// Start a mock that fails every request with the given status and body
    pub async fn start_failing(status: u16, body: &str) -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Error {
            status,
            body: body.to_owned(),
        })
        .await
    }

    /// Start a mock that accepts connections but never responds
    pub async fn start_hanging() -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Hang).await
    }

    async fn start_inner(behavior: Behavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockSpeechState {
            request_count: AtomicU32::new(0),
            last_voice: Mutex::new(None),
            last_body: Mutex::new(None),
            behavior,
        });

        let app = Router::new()
            .route("/v1/text-to-speech/{voice_id}", routing::post(handle_synthesis))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the upstream
    ///
    /// Includes `/v1` since the provider appends `/text-to-speech/{voice_id}`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of synthesis requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Voice id captured from the most recent request path
    pub fn last_voice(&self) -> Option<String> {
        self.state.last_voice.lock().unwrap().clone()
    }

    /// JSON body captured from the most recent request
    pub fn last_body(&self) -> Option<serde_json::Value> {
        self.state.last_body.lock().unwrap().clone()
    }
}

impl Drop for MockSpeech {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_synthesis(
    State(state): State<Arc<MockSpeechState>>,
    Path(voice_id): Path<String>,
    body: Bytes,
) -> Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    *state.last_voice.lock().unwrap() = Some(voice_id);
    *state.last_body.lock().unwrap() = serde_json::from_slice(&body).ok();

    match &state.behavior {
        Behavior::Audio(audio) => (
            StatusCode::OK,
            [(axum::http::header::CONTENT_TYPE, "audio/mpeg")],
            audio.clone(),
        )
            .into_response(),
        Behavior::Error { status, body } => (
            StatusCode::from_u16(*status).unwrap(),
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
        Behavior::Hang => {
            tokio::time::sleep(Duration::from_secs(60)).await;
            StatusCode::OK.into_response()
        }
    }
}
