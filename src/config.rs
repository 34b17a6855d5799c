//! Harness configuration
//!
//! Holds the API base URL and the account keys so the client can be pointed
//! at the live Block.io endpoint or at a local stub server by construction,
//! without any URL rewriting inside the client.

use serde::{Deserialize, Serialize};

/// Base URL of the public Block.io v2 API
pub const LIVE_BASE_URL: &str = "https://block.io/api/v2/";

/// Placeholder key for scenarios that must not touch a funded account
pub const FAKE_API_KEY: &str = "0000-0000-0000-0000";

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
}

/// Harness configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Base URL all request paths are appended to
    pub base_url: String,

    /// API key of the funded test account
    pub valid_api_key: String,

    /// Deliberately unfunded key used by negative scenarios
    pub fake_api_key: String,
}

impl HarnessConfig {
    /// Configuration for a local stub server
    ///
    /// Both keys are placeholders; the stub never checks them.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            valid_api_key: FAKE_API_KEY.to_string(),
            fake_api_key: FAKE_API_KEY.to_string(),
        }
    }

    /// Configuration for the live service, from the environment
    ///
    /// Reads `BLOCKIO_API_KEY` (required), `BLOCKIO_BASE_URL` and
    /// `BLOCKIO_FAKE_API_KEY` (optional). A `.env` file is honored when
    /// present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let valid_api_key = std::env::var("BLOCKIO_API_KEY")
            .map_err(|_| ConfigError::MissingVar("BLOCKIO_API_KEY".to_string()))?;

        Ok(Self {
            base_url: std::env::var("BLOCKIO_BASE_URL")
                .unwrap_or_else(|_| LIVE_BASE_URL.to_string()),
            valid_api_key,
            fake_api_key: std::env::var("BLOCKIO_FAKE_API_KEY")
                .unwrap_or_else(|_| FAKE_API_KEY.to_string()),
        })
    }
}
