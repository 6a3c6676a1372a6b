// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::gcache::FakeGCache;
use parking_lot::Mutex;
use std::sync::Arc;
use syncrepl_core::{Error, Gtid, Result, TrxWriteSet};
use syncrepl_replicator::{Action, ActionSource, Gcs};
use uuid::Uuid;

/// A single-sequencer group communication service: `replv` assigns a
/// strictly increasing seqno under one shared lock and broadcasts the
/// write-set to every registered node, including the sender. Good
/// enough to drive the certification/monitor machinery end to end
/// without a real network.
pub struct FakeGcs {
    group: Uuid,
    sequencer: Arc<Mutex<i64>>,
    peers: Arc<Mutex<Vec<crossbeam_channel::Sender<Action>>>>,
    gcache: Arc<FakeGCache>,
    last_applied: Arc<Mutex<i64>>,
}

impl FakeGcs {
    pub(crate) fn new(
        group: Uuid,
        sequencer: Arc<Mutex<i64>>,
        peers: Arc<Mutex<Vec<crossbeam_channel::Sender<Action>>>>,
        gcache: Arc<FakeGCache>,
    ) -> Self {
        Self { group, sequencer, peers, gcache, last_applied: Arc::new(Mutex::new(-1)) }
    }

    pub fn last_applied(&self) -> i64 {
        *self.last_applied.lock()
    }

    fn broadcast(&self, action: Action) {
        for peer in self.peers.lock().iter() {
            let _ = peer.send(action.clone());
        }
    }
}

impl Gcs for FakeGcs {
    fn replv(&self, ws: &TrxWriteSet) -> Result<(i64, i64)> {
        let seqno = {
            let mut seq = self.sequencer.lock();
            *seq += 1;
            *seq
        };
        self.gcache.store(seqno, ws.clone());
        self.broadcast(Action::WriteSet { local_seqno: seqno, global_seqno: seqno, write_set: ws.clone() });
        Ok((seqno, seqno))
    }

    fn sendv_preordered(&self, _data: Vec<u8>) -> Result<i64> {
        let mut seq = self.sequencer.lock();
        *seq += 1;
        Ok(*seq)
    }

    fn interrupt(&self, _local_seqno: i64) {}

    fn caused(&self) -> Result<Gtid> {
        Ok(Gtid::new(self.group, *self.sequencer.lock()))
    }

    fn request_state_transfer(&self, _donor: Option<String>) -> Result<()> {
        Ok(())
    }

    fn set_last_applied(&self, seqno: i64) {
        *self.last_applied.lock() = seqno;
    }

    fn close(&self) {
        self.broadcast(Action::CommitCut(-1));
    }
}

/// The receiving half of [`FakeGcs`]'s broadcast channel.
pub struct FakeActionSource {
    rx: crossbeam_channel::Receiver<Action>,
}

impl FakeActionSource {
    pub(crate) fn new(rx: crossbeam_channel::Receiver<Action>) -> Self {
        Self { rx }
    }
}

impl ActionSource for FakeActionSource {
    fn recv(&self) -> Result<Action> {
        self.rx.recv().map_err(|_| Error::ConnFail("fake action channel closed".into()))
    }
}
