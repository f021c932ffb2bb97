//! Background sync between the settings page and its data source
//!
//! Network calls block, so they run on a worker thread. The UI enqueues
//! commands and drains results once per frame with [`SettingsSync::poll`].

mod worker;

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use crate::api::SettingsSource;
use crate::domain::SettingsRecord;

/// Progress of the settings read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// A fetch is outstanding
    Loading,
    /// The last fetch succeeded
    Ready,
    /// The last fetch failed
    Failed(String),
}

/// Results reported by the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    Loaded(SettingsRecord),
    LoadFailed(String),
    Saved(SettingsRecord),
    SaveFailed(String),
}

#[derive(Debug)]
enum SyncCommand {
    Fetch,
    Update(SettingsRecord),
}

/// UI-side handle to the sync worker. Dropping it stops the worker.
pub struct SettingsSync {
    cmd_tx: Sender<SyncCommand>,
    rx: Receiver<SyncEvent>,
    load_state: LoadState,
    loaded_once: bool,
    saving: bool,
}

impl SettingsSync {
    /// Spawn the worker and request the initial read
    pub fn start(source: Arc<dyn SettingsSource>) -> Self {
        let (cmd_tx, cmd_rx) = channel();
        let (event_tx, event_rx) = channel();

        thread::spawn(move || {
            worker::sync_loop(source, cmd_rx, event_tx);
        });

        let mut sync = Self {
            cmd_tx,
            rx: event_rx,
            load_state: LoadState::Loading,
            loaded_once: false,
            saving: false,
        };
        sync.send(SyncCommand::Fetch);
        sync
    }

    /// Drain finished requests (non-blocking) and return them in arrival order
    pub fn poll(&mut self) -> Vec<SyncEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            match &event {
                SyncEvent::Loaded(_) => {
                    self.load_state = LoadState::Ready;
                    self.loaded_once = true;
                }
                SyncEvent::LoadFailed(message) => {
                    self.load_state = LoadState::Failed(message.clone());
                }
                SyncEvent::Saved(_) | SyncEvent::SaveFailed(_) => {
                    self.saving = false;
                }
            }
            events.push(event);
        }
        events
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// True while a read is outstanding or nothing has been loaded yet
    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading || !self.loaded_once
    }

    /// True while a write is in flight
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// True while a request is outstanding on the worker
    pub fn is_pending(&self) -> bool {
        self.load_state == LoadState::Loading || self.saving
    }

    /// Read the settings again
    pub fn refetch(&mut self) {
        self.load_state = LoadState::Loading;
        self.send(SyncCommand::Fetch);
    }

    /// Queue a write. Returns false if one is already in flight.
    pub fn submit(&mut self, record: SettingsRecord) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        self.send(SyncCommand::Update(record));
        true
    }

    fn send(&mut self, command: SyncCommand) {
        if self.cmd_tx.send(command).is_err() {
            tracing::error!("[reviews-admin:sync] Worker is gone, dropping request");
            self.load_state = LoadState::Failed("Settings worker stopped".to_string());
            self.saving = false;
        }
    }
}
