//! Main settings panel rendering
//!
//! Contains the top-level render function for the settings view.

use eframe::egui::{self, RichText, ScrollArea};

use super::helpers::{
    render_annotated_section, render_checkbox_field, render_skeleton, render_status_message,
    render_text_field,
};
use super::state::{PanelAction, SettingsState};
use super::view::{self, Control, SectionBody, TextField, Toggle};
use crate::config::GuiSettings;
use crate::domain::{SettingsForm, SettingsRecord, SubmitOutcome};
use crate::gui::theme::{
    ACCENT_CYAN, ACCENT_GREEN, ACCENT_RED, BG_ERROR, BG_PRIMARY, TEXT_DIM, TEXT_MUTED,
    TEXT_PRIMARY,
};

/// Render the settings page.
///
/// `on_submit` receives the payload when the merchant saves and the email is
/// valid. A blocked save writes its reason to the status line instead.
pub fn render_settings(
    ctx: &egui::Context,
    state: &mut SettingsState<'_>,
    on_submit: &mut dyn FnMut(SettingsRecord),
) -> PanelAction {
    let layout = view::page_layout(state.loading);
    let mut action = PanelAction::None;
    let mut submit_requested = false;

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                render_breadcrumb(ui, state.gui);
                ui.add_space(4.0);

                // Header
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(layout.title.to_uppercase())
                            .monospace()
                            .size(18.0)
                            .color(TEXT_PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        submit_requested |= render_save_button(ui, state);
                        render_discard_button(ui, state);
                    });
                });
                ui.add_space(8.0);

                render_status_message(ui, Option::as_ref(state.status));

                if let Some(message) = state.load_error {
                    ui.add_space(8.0);
                    if render_load_error(ui, message) {
                        action = PanelAction::Retry;
                    }
                }
                ui.add_space(16.0);

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for section in &layout.sections {
                            render_annotated_section(
                                ui,
                                section.title,
                                section.description,
                                |ui| match &section.body {
                                    SectionBody::Skeleton(skeleton) => {
                                        render_skeleton(ui, *skeleton);
                                    }
                                    SectionBody::Controls(controls) => {
                                        if let Some(form) = state.form.as_deref_mut() {
                                            for control in controls {
                                                submit_requested |=
                                                    render_control(ui, form, control);
                                            }
                                        }
                                    }
                                },
                            );
                            ui.add_space(16.0);
                        }
                    });
            });
        });

    if submit_requested {
        submit(state, on_submit);
    }

    action
}

fn render_breadcrumb(ui: &mut egui::Ui, gui: &GuiSettings) {
    let text = RichText::new(format!("< {}", gui.breadcrumb_label)).small();
    match gui.breadcrumb_link() {
        Some(url) => {
            if ui.link(text.color(ACCENT_CYAN)).clicked() {
                ui.ctx().open_url(egui::OpenUrl::new_tab(url));
            }
        }
        None => {
            ui.label(text.color(TEXT_MUTED));
        }
    }
}

/// Returns true when the merchant asked to save
fn render_save_button(ui: &mut egui::Ui, state: &SettingsState<'_>) -> bool {
    let enabled = !state.loading && !state.saving && state.form.is_some();
    let label = if state.saving { "Saving..." } else { "Save" };
    let color = if enabled { ACCENT_GREEN } else { TEXT_MUTED };

    ui.add_enabled(enabled, egui::Button::new(RichText::new(label).color(color)))
        .clicked()
}

fn render_discard_button(ui: &mut egui::Ui, state: &mut SettingsState<'_>) {
    let dirty = state.form.as_deref().is_some_and(SettingsForm::is_dirty);
    let enabled = dirty && !state.saving;

    let clicked = ui
        .add_enabled(
            enabled,
            egui::Button::new(RichText::new("Discard").color(TEXT_DIM)),
        )
        .clicked();

    if !clicked {
        return;
    }
    if let Some(form) = state.form.as_deref_mut() {
        form.reset();
        *state.status = None;
    }
}

/// Returns true when Retry was clicked
fn render_load_error(ui: &mut egui::Ui, message: &str) -> bool {
    egui::Frame::NONE
        .fill(BG_ERROR)
        .corner_radius(4.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("Could not load settings: {message}")).color(ACCENT_RED),
                );
                ui.button(RichText::new("Retry").color(TEXT_PRIMARY))
                    .clicked()
            })
            .inner
        })
        .inner
}

/// Render one control bound to the form. Returns true if Enter was pressed in a text field.
fn render_control(ui: &mut egui::Ui, form: &mut SettingsForm, control: &Control) -> bool {
    match *control {
        Control::Checkbox {
            toggle,
            label,
            help,
        } => {
            let mut value = toggle_value(form, toggle);
            if render_checkbox_field(ui, &mut value, label, help) {
                set_toggle(form, toggle, value);
            }
            ui.add_space(8.0);
            false
        }
        Control::TextInput { input, label, hint } => {
            let mut value = text_value(form, input).to_string();
            let response = render_text_field(ui, label, &mut value, 260.0, Some(hint));
            if response.changed() {
                set_text(form, input, value);
            }

            if let Some(error) = form.email_error() {
                ui.label(RichText::new(error.to_string()).small().color(ACCENT_RED));
            }
            ui.add_space(8.0);

            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
        }
    }
}

fn toggle_value(form: &SettingsForm, toggle: Toggle) -> bool {
    match toggle {
        Toggle::AutoPublish => form.values().auto_publish,
        Toggle::EmailNotifications => form.values().email_notifications,
    }
}

fn set_toggle(form: &mut SettingsForm, toggle: Toggle, value: bool) {
    match toggle {
        Toggle::AutoPublish => form.set_auto_publish(value),
        Toggle::EmailNotifications => form.set_email_notifications(value),
    }
}

fn text_value(form: &SettingsForm, input: TextField) -> &str {
    match input {
        TextField::Email => &form.values().email,
    }
}

fn set_text(form: &mut SettingsForm, input: TextField, value: String) {
    match input {
        TextField::Email => form.set_email(value),
    }
}

fn submit(state: &mut SettingsState<'_>, on_submit: &mut dyn FnMut(SettingsRecord)) {
    if state.loading || state.saving {
        return;
    }
    let Some(form) = state.form.as_deref() else {
        return;
    };

    match form.submit(|payload| on_submit(payload)) {
        SubmitOutcome::Submitted => {
            *state.status = Some(("Saving settings...".to_string(), false));
        }
        SubmitOutcome::Blocked(error) => {
            tracing::debug!("[reviews-admin] Save blocked: {}", error);
            *state.status = Some((format!("Settings not saved: {error}"), true));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state<'a>(
        form: &'a mut SettingsForm,
        status: &'a mut Option<(String, bool)>,
        gui: &'a GuiSettings,
    ) -> SettingsState<'a> {
        SettingsState {
            loading: false,
            saving: false,
            form: Some(form),
            load_error: None,
            status,
            gui,
        }
    }

    #[test]
    fn test_blocked_submit_reports_email_error() {
        let gui = GuiSettings::default();
        let mut form = SettingsForm::from_record(SettingsRecord::new(true, false, "a@b.com"));
        form.set_email("bad");
        let mut status = None;
        let mut calls = 0;

        submit(&mut state(&mut form, &mut status, &gui), &mut |_| calls += 1);

        assert_eq!(calls, 0);
        assert_eq!(
            status,
            Some((
                "Settings not saved: Enter a valid email address, like name@example.com"
                    .to_string(),
                true
            ))
        );
    }

    #[test]
    fn test_valid_submit_calls_once_with_payload() {
        let gui = GuiSettings::default();
        let mut form = SettingsForm::from_record(SettingsRecord::new(true, false, "a@b.com"));
        let mut status = None;
        let mut submitted = Vec::new();

        submit(&mut state(&mut form, &mut status, &gui), &mut |record| {
            submitted.push(record)
        });

        assert_eq!(submitted, vec![SettingsRecord::new(true, false, "a@b.com")]);
        assert_eq!(status, Some(("Saving settings...".to_string(), false)));
    }

    #[test]
    fn test_submit_ignored_while_loading_or_saving() {
        let gui = GuiSettings::default();
        let mut form = SettingsForm::from_record(SettingsRecord::new(true, false, "a@b.com"));
        let previous = Some(("Settings saved at 10:00:00".to_string(), false));
        let mut status = previous.clone();
        let mut calls = 0;

        for (loading, saving) in [(true, false), (false, true)] {
            let mut state = state(&mut form, &mut status, &gui);
            state.loading = loading;
            state.saving = saving;
            submit(&mut state, &mut |_| calls += 1);
        }

        assert_eq!(calls, 0);
        assert_eq!(status, previous);
    }
}
