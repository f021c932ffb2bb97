//! GUI runner - launches the settings window
//!
//! The window talks to the GraphQL endpoint from the `[api]` config section.

use std::sync::Arc;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use super::app::SettingsApp;
use crate::api::GraphQlClient;
use crate::config::Config;

/// Window title and eframe app id
const APP_NAME: &str = "Product reviews - Settings";

/// Run the settings window until it is closed
pub fn run_gui(config: Config) -> Result<()> {
    let client = GraphQlClient::from_settings(&config.api);
    info!(
        "[reviews-admin] Starting settings window against {}",
        client.endpoint()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([config.gui.window_width, config.gui.window_height])
            .with_min_inner_size([640.0, 420.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let app = SettingsApp::new(Arc::new(client), config.gui);

    eframe::run_native(APP_NAME, options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
