use crate::error::AppError;
use crate::feed::github_platform::DEFAULT_API_URL;

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the events API, without a trailing slash.
    pub api_url: String,
}

impl Config {
    /// Reads the configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let api_url = std::env::var("GITHUB_API_URL").unwrap_or(DEFAULT_API_URL.to_string());
        let api_url = api_url.trim().trim_end_matches('/').to_string();

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(AppError::ConfigurationError {
                msg: format!("GITHUB_API_URL must be an http(s) URL, got '{}'", api_url),
            });
        }

        Ok(Self { api_url })
    }
}
