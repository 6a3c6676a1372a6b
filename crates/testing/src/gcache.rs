// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use parking_lot::Mutex;
use std::collections::BTreeMap;
use syncrepl_core::TrxWriteSet;
use syncrepl_ist::GCache;

/// An in-memory gcache backed by a `BTreeMap`, retaining every
/// write-set ever stored (no ring-buffer eviction).
#[derive(Default)]
pub struct FakeGCache {
    entries: Mutex<BTreeMap<i64, TrxWriteSet>>,
}

impl FakeGCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, seqno: i64, ws: TrxWriteSet) {
        self.entries.lock().insert(seqno, ws);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GCache for FakeGCache {
    fn first_seqno(&self) -> i64 {
        self.entries.lock().keys().next().copied().unwrap_or(-1)
    }

    fn get(&self, seqno: i64) -> Option<TrxWriteSet> {
        self.entries.lock().get(&seqno).cloned()
    }

    // Shared by every node in a FakeCluster (§9a), so releasing here
    // would drop an entry a slower peer's IST might still need; this
    // test double keeps the default no-op and relies on
    // `RecordingGCache` to verify the release plumbing itself.
}

/// A single-node gcache that records every `release` call instead of
/// storing anything, used to verify the service thread actually
/// drives `GCache::release` (§4.5).
#[derive(Default)]
pub struct RecordingGCache {
    released: Mutex<Vec<i64>>,
}

impl RecordingGCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn released(&self) -> Vec<i64> {
        self.released.lock().clone()
    }
}

impl GCache for RecordingGCache {
    fn first_seqno(&self) -> i64 {
        -1
    }

    fn get(&self, _seqno: i64) -> Option<TrxWriteSet> {
        None
    }

    fn release(&self, seqno: i64) {
        self.released.lock().push(seqno);
    }
}
