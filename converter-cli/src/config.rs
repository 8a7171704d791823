//! Configuration resolved from the environment and command-line flags.

use std::time::Duration;

use anyhow::bail;
use converter_client::ConvertClient;

/// Origin of the conversion API used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://api.apilayer.com/currency_data";

/// Default whole-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Config {
    /// Builds the configuration, falling back to defaults for unset values.
    ///
    /// Blank API keys count as unset.
    pub fn new(
        api_url: Option<String>,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> anyhow::Result<Self> {
        let api_url = api_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            bail!("API URL must start with http:// or https://, got {}", api_url);
        }
        if timeout_secs == 0 {
            bail!("Timeout must be at least one second");
        }

        Ok(Self {
            api_url,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Builds the HTTP client described by this configuration.
    pub fn client(&self) -> anyhow::Result<ConvertClient> {
        let mut client = ConvertClient::new(&self.api_url).with_timeout(self.timeout)?;
        match &self.api_key {
            Some(key) => client = client.with_api_key(key),
            None => tracing::warn!("No API key configured; requests will likely be rejected"),
        }
        Ok(client)
    }
}
