use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Speech upstream configuration
///
/// The relay holds the only copy of the upstream credential; clients never
/// see it. Everything except the credential has a working default.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// Upstream API key; requests fail with a configuration error while unset
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Voice used when the request does not name one
    #[serde(default = "default_voice_id")]
    pub voice_id: String,
    /// Synthesis model forwarded when the request does not name one
    #[serde(default = "default_model_id")]
    pub model_id: String,
    /// Audio encoding and bitrate identifier
    #[serde(default = "default_output_format")]
    pub output_format: String,
    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            voice_id: default_voice_id(),
            model_id: default_model_id(),
            output_format: default_output_format(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl TtsConfig {
    /// Get the upstream timeout as Duration
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Whether a non-empty credential is present
    pub fn credential_configured(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
    }
}

fn default_voice_id() -> String {
    "21m00Tcm4TlvDq8ikWAM".to_string()
}

fn default_model_id() -> String {
    "eleven_multilingual_v2".to_string()
}

fn default_output_format() -> String {
    "mp3_44100_128".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_timeout_seconds() -> u64 {
    60
}
