use serde::Deserialize;

use crate::error::TtsError;

/// Speech synthesis request as received from the browser client
///
/// Every field is optional at the wire level; [`SpeechRequest::resolve`]
/// applies the fallback chain and enforces the one required field.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SpeechRequest {
    /// Text to synthesize into speech
    pub text: Option<String>,
    /// Voice identifier; both spellings are accepted
    #[serde(rename = "voiceId", alias = "voice_id")]
    pub voice_id: Option<String>,
    /// Synthesis model identifier
    #[serde(rename = "modelId", alias = "model_id")]
    pub model_id: Option<String>,
    /// Output audio encoding/bitrate identifier
    #[serde(rename = "outputFormat", alias = "output_format")]
    pub output_format: Option<String>,
}

/// Per-field fallbacks applied when the client omits a value
#[derive(Debug, Clone)]
pub struct SpeechDefaults {
    pub voice_id: String,
    pub model_id: String,
    pub output_format: String,
}

/// Fully resolved synthesis parameters
///
/// Every field holds a usable value; nothing is left undefined when the
/// request is forwarded upstream.
#[derive(Debug)]
pub struct ResolvedSpeech {
    pub text: String,
    pub voice_id: String,
    pub model_id: String,
    pub output_format: String,
}

impl SpeechRequest {
    /// Apply the fallback chain, enforcing the required `text` field
    pub fn resolve(self, defaults: &SpeechDefaults) -> crate::error::Result<ResolvedSpeech> {
        let text = self
            .text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| TtsError::InvalidRequest("'text' is required and must be non-empty".to_string()))?
            .to_string();

        Ok(ResolvedSpeech {
            text,
            voice_id: or_default(self.voice_id, &defaults.voice_id),
            model_id: or_default(self.model_id, &defaults.model_id),
            output_format: or_default(self.output_format, &defaults.output_format),
        })
    }
}

fn or_default(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Raw audio response from the upstream
#[derive(Debug)]
pub struct SpeechResponse {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}

impl SpeechResponse {
    /// Convert the speech response into an axum HTTP response
    pub fn into_response(self) -> axum::response::Response {
        axum::response::Response::builder()
            .header(http::header::CONTENT_TYPE, self.content_type)
            .body(axum::body::Body::from(self.audio))
            .unwrap_or_else(|_| {
                axum::response::Response::builder()
                    .status(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
                    .body(axum::body::Body::empty())
                    .unwrap()
            })
    }
}
