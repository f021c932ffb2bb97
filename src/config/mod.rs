//! Configuration loading and management

mod api;
mod gui;
mod io;

pub use api::ApiSettings;
pub use gui::GuiSettings;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `api.endpoint`
pub const ENDPOINT_ENV: &str = "REVIEWS_ADMIN_ENDPOINT";
/// Environment variable that overrides `api.access_token`
pub const TOKEN_ENV: &str = "REVIEWS_ADMIN_TOKEN";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// GraphQL endpoint settings
    #[serde(default)]
    pub api: ApiSettings,

    /// Window and page settings
    #[serde(default)]
    pub gui: GuiSettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the config the binary should run with.
    ///
    /// Uses `config_override` when given, otherwise the global config
    /// (auto-created on first run). Environment overrides are applied last.
    pub fn resolve(config_override: Option<&Path>) -> Result<Self> {
        let mut config = match config_override {
            Some(path) => Self::from_file(path)?,
            None => Self::load()?,
        };
        config.apply_overrides(
            std::env::var(ENDPOINT_ENV).ok(),
            std::env::var(TOKEN_ENV).ok(),
        );
        Ok(config)
    }

    /// Replace endpoint and token with non-blank override values
    pub fn apply_overrides(&mut self, endpoint: Option<String>, token: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.api.endpoint = endpoint.trim().to_string();
        }
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.api.access_token = token.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.gui.breadcrumb_label, "Product reviews");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            endpoint = "https://reviews.example.com/graphql"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.endpoint, "https://reviews.example.com/graphql");
        assert_eq!(config.api.access_token_header, "X-Access-Token");
        assert!(config.api.token().is_none());
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let mut config = Config::default();
        config.api.access_token = "from-file".to_string();

        config.apply_overrides(
            Some(" https://override.example/graphql ".to_string()),
            Some("from-env".to_string()),
        );

        assert_eq!(config.api.endpoint, "https://override.example/graphql");
        assert_eq!(config.api.token(), Some("from-env"));
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let mut config = Config::default();
        let before = config.clone();

        config.apply_overrides(Some("   ".to_string()), Some(String::new()));

        assert_eq!(config, before);
    }
}
