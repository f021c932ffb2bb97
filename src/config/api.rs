//! GraphQL endpoint settings

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where and how to reach the settings API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// GraphQL endpoint receiving `SettingsQuery` and `updateSettings`
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Access token sent with every request. Leave empty to send none.
    #[serde(default)]
    pub access_token: String,

    /// Header that carries `access_token`
    #[serde(default = "default_access_token_header")]
    pub access_token_header: String,

    /// Read timeout for a single request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:3000/graphql".to_string()
}

fn default_access_token_header() -> String {
    "X-Access-Token".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            access_token: String::new(),
            access_token_header: default_access_token_header(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiSettings {
    /// The configured token, if any
    pub fn token(&self) -> Option<&str> {
        Some(self.access_token.as_str()).filter(|t| !t.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
