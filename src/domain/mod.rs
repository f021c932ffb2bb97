//! Core domain types for the reviews admin

mod form;
mod settings;

pub use form::{EmailError, SettingsForm, SubmitOutcome};
pub use settings::SettingsRecord;
