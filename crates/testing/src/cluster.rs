// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::gcache::FakeGCache;
use crate::gcs::{FakeActionSource, FakeGcs};
use parking_lot::Mutex;
use std::sync::Arc;
use syncrepl_core::Config;
use syncrepl_replicator::{Action, Replicator, SavedState};
use uuid::Uuid;

/// An in-process cluster of [`Replicator`]s sharing one
/// [`FakeGcs`] sequencer and one [`FakeGCache`], used to exercise
/// multi-node scenarios without any real transport (§9a test
/// harness).
pub struct FakeCluster {
    group: Uuid,
    sequencer: Arc<Mutex<i64>>,
    peers: Arc<Mutex<Vec<crossbeam_channel::Sender<Action>>>>,
    gcache: Arc<FakeGCache>,
}

impl FakeCluster {
    pub fn new() -> Self {
        Self {
            group: Uuid::new_v4(),
            sequencer: Arc::new(Mutex::new(-1)),
            peers: Arc::new(Mutex::new(Vec::new())),
            gcache: Arc::new(FakeGCache::new()),
        }
    }

    pub fn group(&self) -> Uuid {
        self.group
    }

    pub fn gcache(&self) -> Arc<FakeGCache> {
        Arc::clone(&self.gcache)
    }

    /// Spawns a fresh node: its own `FakeGcs` handle registered with
    /// the cluster's broadcast list, its own `FakeActionSource`, and
    /// a `Replicator` over an on-disk `SavedState` in `tempdir`.
    pub fn spawn_node(&self, config: Config) -> (Arc<Replicator>, FakeActionSource) {
        self.spawn_node_with_gcache(config, Arc::clone(&self.gcache) as Arc<dyn syncrepl_ist::GCache>)
    }

    /// Like [`spawn_node`](Self::spawn_node), but the `Replicator`'s
    /// own gcache collaborator is `gcache` rather than the cluster's
    /// shared `FakeGCache` — the node still replicates through the
    /// shared `FakeGcs`, so this only changes what observes
    /// `GCache::release` (§4.5).
    pub fn spawn_node_with_gcache(
        &self,
        config: Config,
        gcache: Arc<dyn syncrepl_ist::GCache>,
    ) -> (Arc<Replicator>, FakeActionSource) {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.peers.lock().push(tx);
        let gcs = Arc::new(FakeGcs::new(self.group, Arc::clone(&self.sequencer), Arc::clone(&self.peers), Arc::clone(&self.gcache)));
        let action_source = FakeActionSource::new(rx);

        let dir = std::env::temp_dir().join(format!("syncrepl-cluster-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let saved_state = SavedState::open(dir.join("state.dat")).unwrap();

        let replicator = Replicator::new(config, gcs, gcache, saved_state);
        (replicator, action_source)
    }
}

impl Default for FakeCluster {
    fn default() -> Self {
        Self::new()
    }
}
