pub mod elevenlabs;

use async_trait::async_trait;

use crate::types::{ResolvedSpeech, SpeechResponse};

/// Trait for speech upstream implementations
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Fail fast when the provider cannot make authenticated calls
    ///
    /// Checked before request fields are even looked at, so an
    /// unconfigured relay rejects every request the same way.
    fn ensure_configured(&self) -> crate::error::Result<()>;

    /// Synthesize text to speech
    async fn synthesize(&self, request: ResolvedSpeech) -> crate::error::Result<SpeechResponse>;

    /// Get the provider name
    fn name(&self) -> &str;
}
