use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::TtsError,
    http_client::http_client,
    types::{ResolvedSpeech, SpeechResponse},
};

use super::TtsProvider;

const DEFAULT_ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1";

/// Fixed voice tuning forwarded with every request
const VOICE_STABILITY: f64 = 0.5;
const VOICE_SIMILARITY_BOOST: f64 = 0.75;

/// `ElevenLabs` speech upstream
pub struct ElevenLabsProvider {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    timeout: Duration,
}

impl ElevenLabsProvider {
    pub fn new(api_key: Option<SecretString>, base_url: Option<String>, timeout: Duration) -> Self {
        let client = http_client();
        let base_url = base_url.unwrap_or_else(|| DEFAULT_ELEVENLABS_API_URL.to_string());

        Self {
            client,
            base_url,
            api_key,
            timeout,
        }
    }

    /// The credential, if one is actually usable
    fn configured_key(&self) -> crate::error::Result<&SecretString> {
        match &self.api_key {
            Some(key) if !key.expose_secret().is_empty() => Ok(key),
            _ => Err(TtsError::ConfigError(
                "ElevenLabs API key is not configured".to_string(),
            )),
        }
    }
}

#[derive(serde::Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
    output_format: &'a str,
}

#[derive(serde::Serialize)]
struct VoiceSettings {
    stability: f64,
    similarity_boost: f64,
}

#[async_trait]
impl TtsProvider for ElevenLabsProvider {
    fn ensure_configured(&self) -> crate::error::Result<()> {
        self.configured_key().map(|_| ())
    }

    async fn synthesize(&self, request: ResolvedSpeech) -> crate::error::Result<SpeechResponse> {
        let api_key = self.configured_key()?;

        let url = format!("{}/text-to-speech/{}", self.base_url, request.voice_id);

        tracing::debug!(
            "ElevenLabs TTS request: voice={}, model={}, text_len={}",
            request.voice_id,
            request.model_id,
            request.text.len(),
        );

        let body = ElevenLabsRequest {
            text: &request.text,
            model_id: &request.model_id,
            voice_settings: VoiceSettings {
                stability: VOICE_STABILITY,
                similarity_boost: VOICE_SIMILARITY_BOOST,
            },
            output_format: &request.output_format,
        };

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .header("xi-api-key", api_key.expose_secret().to_string())
            .header(http::header::ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ElevenLabs request failed: {e}");
                TtsError::ConnectionError(format!("Failed to reach ElevenLabs: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let content_type = response
                .headers()
                .get(http::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            tracing::error!("ElevenLabs API error ({status})");

            // The body goes back to the caller untouched; if it cannot be
            // read, a generic marker takes its place
            let body = response
                .bytes()
                .await
                .unwrap_or_else(|_| Bytes::from(format!("upstream error {}", status.as_u16())));

            return Err(TtsError::Upstream {
                status: status.as_u16(),
                body,
                content_type,
            });
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read ElevenLabs response body: {e}");
            TtsError::ConnectionError(format!("Failed to read ElevenLabs response body: {e}"))
        })?;

        tracing::debug!("ElevenLabs TTS synthesis complete, {} bytes", audio.len());

        Ok(SpeechResponse {
            audio: audio.to_vec(),
            content_type,
        })
    }

    fn name(&self) -> &str {
        "elevenlabs"
    }
}
