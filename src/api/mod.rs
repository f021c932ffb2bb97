//! Data access for merchant settings
//!
//! The settings page never talks to the network directly. It is handed a
//! [`SettingsSource`] and the GUI drives it from a background thread.

mod client;
mod error;
pub mod graphql;

pub use client::GraphQlClient;
pub use error::ApiError;

use crate::domain::SettingsRecord;

/// Read and write access to the merchant's settings
pub trait SettingsSource: Send + Sync {
    /// Fetch the current settings (`SettingsQuery`)
    fn fetch_settings(&self) -> Result<SettingsRecord, ApiError>;

    /// Replace the stored settings (`updateSettings`) and return what the server kept
    fn update_settings(&self, settings: &SettingsRecord) -> Result<SettingsRecord, ApiError>;
}
