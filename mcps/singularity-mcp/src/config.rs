//! Configuration loading for singularity-mcp
//!
//! Configuration is read from the environment once at startup and passed
//! into the API client by value. Nothing else in the crate touches env vars.
//!
//! - `SINGULARITY_API_TOKEN` (required) - bearer token for the API
//! - `SINGULARITY_API_URL` (optional) - base URL override
//! - `SINGULARITY_API_TIMEOUT_SECS` (optional) - outbound request timeout

use anyhow::{Context, Result};
use std::time::Duration;

/// SingularityApp API v2 base URL
pub const DEFAULT_BASE_URL: &str = "https://api.singularity-app.com/v2";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the SingularityApp API
    pub token: String,
    /// API base URL, without trailing slash
    pub base_url: String,
    /// Timeout applied to every outbound request
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// A missing token is a fatal startup error; there is no fallback.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("SINGULARITY_API_TOKEN").context(
            "SINGULARITY_API_TOKEN environment variable is required. \
             Get your token at https://me.singularity-app.com",
        )?;

        let base_url = std::env::var("SINGULARITY_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = std::env::var("SINGULARITY_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_has_no_trailing_slash() {
        assert!(!DEFAULT_BASE_URL.ends_with('/'));
    }
}
