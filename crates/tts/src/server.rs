use crate::{
    provider::{TtsProvider, elevenlabs::ElevenLabsProvider},
    types::{SpeechDefaults, SpeechRequest, SpeechResponse},
};

/// Relay core: resolves request fields and hands the call to the upstream
pub struct Server {
    provider: Box<dyn TtsProvider>,
    defaults: SpeechDefaults,
}

impl Server {
    /// Synthesize text to speech through the configured upstream
    ///
    /// The credential check runs before the body fields are looked at, and
    /// validation runs before anything touches the network.
    pub async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse> {
        self.provider.ensure_configured()?;

        let resolved = request.resolve(&self.defaults)?;

        self.provider.synthesize(resolved).await
    }
}

/// Builder for constructing the relay core from configuration
pub struct TtsServerBuilder<'a> {
    config: &'a vox_config::Config,
}

impl<'a> TtsServerBuilder<'a> {
    pub const fn new(config: &'a vox_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> Server {
        let tts = &self.config.tts;

        let provider = ElevenLabsProvider::new(tts.api_key.clone(), tts.base_url.clone(), tts.timeout());

        tracing::debug!("TTS relay initialized with provider '{}'", provider.name());

        Server {
            provider: Box::new(provider),
            defaults: SpeechDefaults {
                voice_id: tts.voice_id.clone(),
                model_id: tts.model_id.clone(),
                output_format: tts.output_format.clone(),
            },
        }
    }
}
