use serde::Deserialize;

use crate::error::Result;

/// Runtime settings, read once at startup and passed down by value.
/// Everything is overridable through `APP_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Serve bundled recommendations instead of calling the live model.
    pub use_mock_data: bool,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub generation_model: String,
    pub generation_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", "3000")?
            .set_default("use_mock_data", "false")?
            .set_default("openai_api_key", "")?
            .set_default("openai_base_url", "https://api.openai.com")?
            .set_default("generation_model", "gpt-4o-mini")?
            .set_default("generation_timeout_secs", "30")?
            .set_default("connect_timeout_secs", "15")?
            .add_source(config::Environment::with_prefix("APP"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
