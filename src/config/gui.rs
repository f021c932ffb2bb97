//! GUI-specific settings

use serde::{Deserialize, Serialize};

/// Window and page chrome settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiSettings {
    /// Initial window width in points
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Initial window height in points
    #[serde(default = "default_window_height")]
    pub window_height: f32,

    /// Breadcrumb shown above the page title
    #[serde(default = "default_breadcrumb_label")]
    pub breadcrumb_label: String,

    /// Breadcrumb target. Absolute URLs open in the browser; anything else
    /// renders as plain text.
    #[serde(default = "default_breadcrumb_url")]
    pub breadcrumb_url: String,
}

fn default_window_width() -> f32 {
    900.0
}

fn default_window_height() -> f32 {
    640.0
}

fn default_breadcrumb_label() -> String {
    "Product reviews".to_string()
}

fn default_breadcrumb_url() -> String {
    "/".to_string()
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            breadcrumb_label: default_breadcrumb_label(),
            breadcrumb_url: default_breadcrumb_url(),
        }
    }
}

impl GuiSettings {
    /// Breadcrumb URL when it can be opened outside the app
    pub fn breadcrumb_link(&self) -> Option<&str> {
        let url = self.breadcrumb_url.trim();
        (url.starts_with("http://") || url.starts_with("https://")).then_some(url)
    }
}
