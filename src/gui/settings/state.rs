//! Inputs of the settings view
//!
//! The view does not own any data source. Its caller passes the loading flag,
//! the editable form and a submit callback, and reacts to the returned action.

use crate::config::GuiSettings;
use crate::domain::SettingsForm;

/// State handed to [`super::render_settings`] each frame
pub struct SettingsState<'a> {
    /// True until settings have been fetched
    pub loading: bool,
    /// True while an update is in flight
    pub saving: bool,
    /// Editable copy of the settings (absent until first load)
    pub form: Option<&'a mut SettingsForm>,
    /// Message of the last failed read, shown with a retry button
    pub load_error: Option<&'a str>,
    /// Status line: (message, is_error)
    pub status: &'a mut Option<(String, bool)>,
    pub gui: &'a GuiSettings,
}

/// Requests the view cannot satisfy on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelAction {
    #[default]
    None,
    /// Fetch the settings again after a failed read
    Retry,
}
