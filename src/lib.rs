//! reviews-admin - merchant settings for a product reviews app
//!
//! The settings page lets a merchant choose whether new reviews are published
//! automatically (after a spam check) and whether an email goes out for each
//! review. Settings live behind a GraphQL API:
//!
//! - `SettingsQuery` reads `{ autoPublish, emailNotifications, email }`
//! - `updateSettings` replaces all three and returns what was stored
//!
//! ## Layout
//!
//! - [`domain`]: the settings record and the editable form with email validation
//! - [`api`]: the [`api::SettingsSource`] trait and its GraphQL client
//! - [`gui`]: the egui settings window
//! - [`config`]: `~/.reviews-admin/config.toml`

pub mod api;
pub mod config;
pub mod domain;
pub mod gui;

pub use domain::*;
