//! Init command implementation

use anyhow::{Context, Result, bail};
use std::path::Path;

use reviews_admin::config::Config;

/// Default configuration content for `reviews-admin init`
pub const DEFAULT_CONFIG: &str = r#"# reviews-admin configuration
# ===========================
#
# Environment overrides:
#   REVIEWS_ADMIN_ENDPOINT - replaces api.endpoint
#   REVIEWS_ADMIN_TOKEN    - replaces api.access_token

# GraphQL endpoint serving `settings` and `updateSettings`
[api]
endpoint = "http://127.0.0.1:3000/graphql"
# Sent in `access_token_header` with every request. Leave empty to send none.
access_token = ""
access_token_header = "X-Access-Token"
# Read timeout per request, in seconds
timeout_secs = 30

# Settings window
[gui]
window_width = 900.0
window_height = 640.0
breadcrumb_label = "Product reviews"
# Absolute URLs open in the browser; anything else renders as plain text
breadcrumb_url = "/"
"#;

/// Write the default config to `config_path` (or the global path)
pub async fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
    println!("Created: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\ntimeout_secs = 5\n").unwrap();

        let err = init_command(Some(&path), false).await.unwrap_err();
        assert!(err.to_string().contains("already exists"));

        init_command(Some(&path), true).await.unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());
    }
}
