//! # Client Configuration
//!
//! Configuration for the dashboard client, loaded from environment variables
//! with sensible defaults and validated on startup to fail fast if
//! misconfigured.

use std::path::PathBuf;

use lib_utils::envs::get_env_or;

/// Default backend base URL (includes the `/api` prefix).
const DEFAULT_API_URL: &str =
    "https://prismon-api-b2aeetbkezhwdhg3.southafricanorth-01.azurewebsites.net/api";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default path of the durable session document.
const DEFAULT_SESSION_FILE: &str = "./prismon-session.json";

/// Client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Backend API base URL, without a trailing slash
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Path of the durable session document (token + onboarding flag)
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let base_url = get_env_or("PRISMON_API_URL", DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = get_env_or("PRISMON_HTTP_TIMEOUT_SECS", "10")
            .parse()
            .map_err(|e| format!("PRISMON_HTTP_TIMEOUT_SECS must be a valid number: {}", e))?;

        let session_file = PathBuf::from(get_env_or("PRISMON_SESSION_FILE", DEFAULT_SESSION_FILE));

        let config = Self {
            base_url,
            timeout_secs,
            session_file,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("PRISMON_API_URL must be an absolute http(s) URL".to_string());
        }

        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err("PRISMON_HTTP_TIMEOUT_SECS must be between 1 and 300".to_string());
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}
