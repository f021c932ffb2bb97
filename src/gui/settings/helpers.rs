//! UI helper functions for settings rendering
//!
//! Provides reusable UI components for the settings panel.

use eframe::egui::{self, RichText};

use super::view::Skeleton;
use crate::gui::theme::{
    ACCENT_GREEN, ACCENT_RED, BG_SECONDARY, SKELETON_FILL, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};

/// Width of the title/description column of an annotated section
const ANNOTATION_WIDTH: f32 = 220.0;

/// Render a labeled text input field, returning the edit's response
pub fn render_text_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    width: f32,
    hint: Option<&str>,
) -> egui::Response {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(TEXT_MUTED));
        let mut edit = egui::TextEdit::singleline(value)
            .font(egui::TextStyle::Monospace)
            .text_color(TEXT_PRIMARY)
            .desired_width(width);
        if let Some(h) = hint {
            edit = edit.hint_text(h);
        }
        ui.add(edit)
    })
    .inner
}

/// Render a labeled checkbox with description. Returns true if toggled.
pub fn render_checkbox_field(
    ui: &mut egui::Ui,
    value: &mut bool,
    label: &str,
    description: &str,
) -> bool {
    ui.horizontal(|ui| {
        let changed = ui.checkbox(value, "").changed();
        ui.label(RichText::new(label).color(TEXT_DIM));
        ui.label(RichText::new(description).small().color(TEXT_MUTED));
        changed
    })
    .inner
}

/// Render a status message (success or error)
pub fn render_status_message(ui: &mut egui::Ui, status: Option<&(String, bool)>) {
    if let Some((msg, is_error)) = status {
        let color = if *is_error { ACCENT_RED } else { ACCENT_GREEN };
        ui.label(RichText::new(msg).color(color));
    }
}

/// Render a section frame with secondary background
pub fn render_section_frame<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(4.0)
        .inner_margin(12.0)
        .show(ui, add_contents)
        .inner
}

/// Title and description on the left, card on the right
pub fn render_annotated_section<R>(
    ui: &mut egui::Ui,
    title: &str,
    description: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(ANNOTATION_WIDTH);
            ui.label(RichText::new(title).monospace().color(TEXT_PRIMARY));
            ui.add_space(4.0);
            ui.label(RichText::new(description).small().color(TEXT_DIM));
        });
        ui.add_space(16.0);
        ui.vertical(|ui| render_section_frame(ui, add_contents)).inner
    })
    .inner
}

/// Grey bars standing in for text that has not loaded yet
pub fn render_skeleton(ui: &mut egui::Ui, skeleton: Skeleton) {
    let width = ui.available_width().max(120.0);

    for _ in 0..skeleton.display_lines {
        skeleton_bar(ui, width * 0.4, 20.0);
        ui.add_space(10.0);
    }
    for line in 0..skeleton.body_lines {
        let last = line + 1 == skeleton.body_lines;
        skeleton_bar(ui, if last { width * 0.6 } else { width }, 10.0);
        ui.add_space(8.0);
    }
}

fn skeleton_bar(ui: &mut egui::Ui, width: f32, height: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    ui.painter().rect_filled(rect, 3.0, SKELETON_FILL);
}
