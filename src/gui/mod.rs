//! GUI module for the reviews admin
//!
//! A native window hosting the settings page. Reads and writes run on a
//! background worker (see [`sync`]); the page itself only renders state and
//! reports what the merchant asked for.

pub mod app;
pub mod runner;
pub mod settings;
pub mod sync;
pub mod theme;

pub use app::SettingsApp;
pub use runner::run_gui;
pub use sync::{LoadState, SettingsSync, SyncEvent};
