//! Show command implementation

use anyhow::{Context, Result};

use reviews_admin::SettingsRecord;
use reviews_admin::api::{GraphQlClient, SettingsSource};
use reviews_admin::config::Config;

/// Fetch and print the current settings
pub async fn show_command(config: &Config, json: bool) -> Result<()> {
    let client = GraphQlClient::from_settings(&config.api);
    let endpoint = client.endpoint().to_string();

    let settings = tokio::task::spawn_blocking(move || client.fetch_settings())
        .await
        .context("Settings request was cancelled")??;

    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        println!("Settings ({}):\n", endpoint);
        print_settings(&settings);
    }

    Ok(())
}

pub fn print_settings(settings: &SettingsRecord) {
    println!("  Auto publish:         {}", on_off(settings.auto_publish));
    println!(
        "  Email notifications:  {}",
        on_off(settings.email_notifications)
    );
    if settings.email.is_empty() {
        println!("  Notification email:   (not set)");
    } else {
        println!("  Notification email:   {}", settings.email);
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
