use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// A missing upstream credential is deliberately not an error here:
    /// the relay must start and answer each request with a configuration
    /// failure until the credential is provided.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream timeout is zero
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.tts.timeout_seconds == 0 {
            anyhow::bail!("tts.timeout_seconds must be greater than 0");
        }

        if !self.tts.credential_configured() {
            tracing::warn!("no upstream API key configured; synthesis requests will be rejected");
        }

        Ok(())
    }
}
