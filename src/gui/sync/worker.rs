//! Worker thread that performs settings reads and writes

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};

use tracing::{debug, warn};

use super::{SyncCommand, SyncEvent};
use crate::api::SettingsSource;

/// Serve commands until the UI side hangs up
pub(super) fn sync_loop(
    source: Arc<dyn SettingsSource>,
    rx: Receiver<SyncCommand>,
    tx: Sender<SyncEvent>,
) {
    while let Ok(command) = rx.recv() {
        let event = match command {
            SyncCommand::Fetch => match source.fetch_settings() {
                Ok(record) => SyncEvent::Loaded(record),
                Err(e) => {
                    warn!("[reviews-admin:sync] Failed to load settings: {}", e);
                    SyncEvent::LoadFailed(e.to_string())
                }
            },
            SyncCommand::Update(record) => match source.update_settings(&record) {
                Ok(saved) => SyncEvent::Saved(saved),
                Err(e) => {
                    warn!("[reviews-admin:sync] Failed to save settings: {}", e);
                    SyncEvent::SaveFailed(e.to_string())
                }
            },
        };

        if tx.send(event).is_err() {
            break;
        }
    }
    debug!("[reviews-admin:sync] Worker stopped");
}
