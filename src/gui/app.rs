//! Main application state for the settings window

use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use tracing::info;

use super::settings::{PanelAction, SettingsState, render_settings};
use super::sync::{LoadState, SettingsSync, SyncEvent};
use crate::api::SettingsSource;
use crate::config::GuiSettings;
use crate::domain::{SettingsForm, SettingsRecord};

/// How often to repaint while a request is outstanding
const PENDING_REPAINT: Duration = Duration::from_millis(100);

/// The settings window
pub struct SettingsApp {
    sync: SettingsSync,
    form: Option<SettingsForm>,
    /// Status line: (message, is_error)
    status: Option<(String, bool)>,
    gui: GuiSettings,
}

impl SettingsApp {
    /// Create the app and start loading settings from `source`
    pub fn new(source: Arc<dyn SettingsSource>, gui: GuiSettings) -> Self {
        Self {
            sync: SettingsSync::start(source),
            form: None,
            status: None,
            gui,
        }
    }

    pub fn form(&self) -> Option<&SettingsForm> {
        self.form.as_ref()
    }

    pub fn status(&self) -> Option<&(String, bool)> {
        self.status.as_ref()
    }

    /// True while the page should show skeletons
    pub fn is_loading(&self) -> bool {
        self.sync.is_loading() || self.form.is_none()
    }

    /// Drain finished requests into the form and status line
    pub fn process_events(&mut self) {
        for event in self.sync.poll() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: SyncEvent) {
        match event {
            SyncEvent::Loaded(record) => {
                info!("[reviews-admin] Settings loaded");
                self.form = Some(SettingsForm::from_record(record));
            }
            SyncEvent::LoadFailed(_) => {
                // Shown by the load error banner
            }
            SyncEvent::Saved(record) => {
                info!("[reviews-admin] Settings saved");
                if let Some(form) = self.form.as_mut() {
                    form.accept_saved(record);
                }
                self.status = Some((
                    format!(
                        "Settings saved at {}",
                        chrono::Local::now().format("%H:%M:%S")
                    ),
                    false,
                ));
            }
            SyncEvent::SaveFailed(message) => {
                self.status = Some((format!("Failed to save settings: {message}"), true));
            }
        }
    }

    /// Hand a validated payload to the sync worker
    fn submit(&mut self, record: SettingsRecord) {
        if !self.sync.submit(record) {
            tracing::debug!("[reviews-admin] Save already in flight, ignoring");
        }
    }
}

impl eframe::App for SettingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events();

        let loading = self.is_loading();
        let saving = self.sync.is_saving();
        let load_error = match self.sync.load_state() {
            LoadState::Failed(message) => Some(message.clone()),
            _ => None,
        };

        let mut submitted = None;
        let action = render_settings(
            ctx,
            &mut SettingsState {
                loading,
                saving,
                form: self.form.as_mut(),
                load_error: load_error.as_deref(),
                status: &mut self.status,
                gui: &self.gui,
            },
            &mut |record: SettingsRecord| submitted = Some(record),
        );

        if let Some(record) = submitted {
            self.submit(record);
        }

        if action == PanelAction::Retry {
            self.status = None;
            self.sync.refetch();
        }

        if self.sync.is_pending() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}
