//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use secrecy::SecretString;
use vox_config::{Config, CorsConfig, ServerConfig, TtsConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                tts: TtsConfig::default(),
            },
        }
    }

    /// Point the relay at a mock upstream with a test credential
    pub fn with_upstream(mut self, base_url: &str) -> Self {
        self.config.tts.api_key = Some(SecretString::from("test-key"));
        self.config.tts.base_url = Some(base_url.to_owned());
        self
    }

    /// Point the relay at a mock upstream without any credential
    pub fn with_unconfigured_upstream(mut self, base_url: &str) -> Self {
        self.config.tts.base_url = Some(base_url.to_owned());
        self
    }

    /// Set the upstream timeout in seconds
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config.tts.timeout_seconds = seconds;
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = config;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
