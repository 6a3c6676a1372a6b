// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use parking_lot::Mutex;
use syncrepl_core::{Result, TrxWriteSet};
use syncrepl_replicator::{EventObserver, View};

/// An [`EventObserver`] that records every applied write-set instead
/// of touching a real database, so tests can assert on apply order.
#[derive(Default)]
pub struct RecordingObserver {
    applied: Mutex<Vec<TrxWriteSet>>,
    unordered: Mutex<Vec<Vec<u8>>>,
    synced: Mutex<bool>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Vec<TrxWriteSet> {
        self.applied.lock().clone()
    }

    pub fn is_synced(&self) -> bool {
        *self.synced.lock()
    }
}

impl EventObserver for RecordingObserver {
    fn apply(&self, write_set: &TrxWriteSet) -> Result<()> {
        self.applied.lock().push(write_set.clone());
        Ok(())
    }

    fn unordered(&self, data: &[u8]) -> Result<()> {
        self.unordered.lock().push(data.to_vec());
        Ok(())
    }

    fn view(&self, _view: &View) -> Option<Option<String>> {
        None
    }

    fn synced(&self) {
        *self.synced.lock() = true;
    }
}
