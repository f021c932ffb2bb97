//! Settings module for the GUI
//!
//! Renders the product reviews settings page:
//! - Auto publish: publish reviews automatically once spam-checked
//! - Email settings: per-review notifications and the address they go to
//!
//! While settings load, both sections show skeleton placeholders.

mod helpers;
mod panel;
mod state;
pub mod view;

pub use panel::render_settings;
pub use state::{PanelAction, SettingsState};
