//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Connection settings for the hosted backend.
pub struct BackendConfig {
    /// Base URL of the hosted service, without a trailing slash.
    pub base_url: String,
    /// Publishable API key sent with every request.
    pub api_key: String,
}

impl BackendConfig {
    /// Loads the configuration from an optional `skillmatch.yaml` file and
    /// `SKILLMATCH_*` environment variables, the latter taking precedence.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        let settings = config::Config::builder()
            .add_source(config::File::with_name("skillmatch").required(false))
            .add_source(config::Environment::with_prefix("SKILLMATCH"))
            .build()?;
        let mut cfg: Self = settings.try_deserialize()?;
        while cfg.base_url.ends_with('/') {
            cfg.base_url.pop();
        }
        Ok(cfg)
    }
}
