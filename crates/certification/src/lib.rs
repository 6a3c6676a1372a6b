// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! The certification index: a concurrent map from key fingerprint to
//! last-writer seqno that decides conflict among globally ordered
//! write-sets, derives `depends_seqno`, and reports a
//! safe-to-discard purge watermark (§4.2).

use dashmap::DashMap;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU8, Ordering};
use syncrepl_core::{proto_version, KeyMode, TrxWriteSet};
use tracing::{debug, warn};

/// Outcome of certifying a single write-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertOutcome {
    TestOk,
    TestFailed,
}

#[derive(Clone, Copy)]
struct KeyEntry {
    last_writer_seqno: i64,
    mode: KeyMode,
}

/// Logged once the index grows past this many live keys without a
/// purge, mirroring the original's size warning on its trx map.
const SIZE_WARNING_THRESHOLD: usize = 10_000;

/// The index key an ISOLATION write-set is inserted under instead of
/// its (normally empty) key set: a single entry standing in for the
/// entire key space, so every later write-set that did not see it
/// conflicts regardless of which keys it touches (§4.2 TOI handling).
const TOI_SENTINEL_KEY: u64 = u64::MAX;

pub struct Certification {
    index: DashMap<u64, KeyEntry>,
    /// Every appended global_seqno, needed to compute the
    /// safe-to-discard watermark and to bound `purge_trxs_upto`.
    committed: Mutex<BTreeMap<i64, bool>>,
    position: Mutex<i64>,
    /// The node's currently negotiated `proto_max` (§6), consulted by
    /// certification step 1 to reject a write-set whose `ws_version`
    /// the current protocol no longer allows.
    proto_max: AtomicU8,
}

impl Default for Certification {
    fn default() -> Self {
        Self::new()
    }
}

impl Certification {
    pub fn new() -> Self {
        Self {
            index: DashMap::new(),
            committed: Mutex::new(BTreeMap::new()),
            position: Mutex::new(-1),
            proto_max: AtomicU8::new(syncrepl_core::Config::default().proto_max),
        }
    }

    /// Sets the `proto_max` certification step 1 checks incoming
    /// write-sets' `ws_version` against, tracking a live config
    /// change (§6).
    pub fn set_proto_max(&self, proto_max: u8) {
        self.proto_max.store(proto_max, Ordering::Relaxed);
    }

    /// Wipes the index and resets the append position, used when a
    /// node adopts a new initial GTID after state transfer.
    pub fn assign_initial_position(&self, seqno: i64) {
        self.index.clear();
        self.committed.lock().clear();
        *self.position.lock() = seqno;
    }

    pub fn position(&self) -> i64 {
        *self.position.lock()
    }

    /// Certifies `ws` against the index without inserting it.
    pub fn test(&self, ws: &TrxWriteSet, global_seqno: i64) -> (CertOutcome, i64) {
        let proto_max = self.proto_max.load(Ordering::Relaxed);
        let allowed_ws_ver = proto_version(proto_max).map(|p| p.ws_ver).unwrap_or(0);
        if ws.ws_version > allowed_ws_ver {
            debug!(
                global_seqno,
                ws_version = ws.ws_version,
                allowed_ws_ver,
                "certification rejected a write-set whose record version the current proto disallows"
            );
            return (CertOutcome::TestFailed, -1);
        }

        let mut depends_seqno = ws.last_seen_seqno;

        if ws.is_toi() {
            // An isolation write-set conflicts with everything committed
            // after it last saw the group, regardless of key overlap: it
            // is certified against the whole index, not just its own
            // (normally empty) key set.
            for entry in self.index.iter() {
                if entry.last_writer_seqno > ws.last_seen_seqno {
                    debug!(global_seqno, fingerprint = *entry.key(), "isolation write-set conflicts with a concurrent writer");
                    return (CertOutcome::TestFailed, -1);
                }
                depends_seqno = depends_seqno.max(entry.last_writer_seqno);
            }
            return (CertOutcome::TestOk, depends_seqno);
        }

        // A live isolation sentinel conflicts with every non-TOI
        // write-set that did not see it, even though it shares no key
        // with this write-set's own key set.
        if let Some(entry) = self.index.get(&TOI_SENTINEL_KEY) {
            if entry.last_writer_seqno > ws.last_seen_seqno {
                debug!(global_seqno, "certification conflict against a concurrent isolation write-set");
                return (CertOutcome::TestFailed, -1);
            }
            depends_seqno = depends_seqno.max(entry.last_writer_seqno);
        }

        for key in &ws.keys {
            if let Some(entry) = self.index.get(&key.fingerprint) {
                let conflicts = entry.last_writer_seqno > ws.last_seen_seqno
                    && (entry.mode == KeyMode::Exclusive || key.mode == KeyMode::Exclusive);
                if conflicts {
                    debug!(global_seqno, fingerprint = key.fingerprint, "certification conflict");
                    return (CertOutcome::TestFailed, -1);
                }
                depends_seqno = depends_seqno.max(entry.last_writer_seqno);
            }
        }
        (CertOutcome::TestOk, depends_seqno)
    }

    /// Certifies `ws` and, on success, inserts it into the index as
    /// the new last writer: an isolation write-set replaces the
    /// whole-key-space sentinel, everything else upserts its own
    /// exclusive keys. Returns the outcome and the derived
    /// `depends_seqno` (§4.2 step 4).
    pub fn append_trx(&self, ws: &TrxWriteSet, global_seqno: i64) -> (CertOutcome, i64) {
        let (outcome, depends_seqno) = self.test(ws, global_seqno);
        if outcome == CertOutcome::TestFailed {
            return (outcome, depends_seqno);
        }
        if ws.is_toi() {
            self.index.insert(TOI_SENTINEL_KEY, KeyEntry { last_writer_seqno: global_seqno, mode: KeyMode::Exclusive });
        } else {
            for key in &ws.keys {
                if key.mode == KeyMode::Exclusive {
                    self.index.insert(key.fingerprint, KeyEntry { last_writer_seqno: global_seqno, mode: key.mode });
                }
            }
        }
        *self.position.lock() = global_seqno;
        self.committed.lock().insert(global_seqno, false);
        if self.index.len() > SIZE_WARNING_THRESHOLD {
            warn!(entries = self.index.len(), "certification index growing past warning threshold, purge may be lagging");
        }
        (CertOutcome::TestOk, depends_seqno)
    }

    /// Marks `global_seqno` committed. Returns the new
    /// safe-to-discard watermark: the highest seqno such that every
    /// seqno at or below it is committed.
    pub fn set_trx_committed(&self, global_seqno: i64) -> i64 {
        let mut committed = self.committed.lock();
        committed.insert(global_seqno, true);
        let mut watermark = -1;
        for (&seqno, &is_committed) in committed.iter() {
            if is_committed && seqno == watermark + 1 {
                watermark = seqno;
            } else {
                break;
            }
        }
        watermark
    }

    /// Erases index entries whose last-writer seqno is below
    /// `seqno`, refusing to discard keys still referenced by an
    /// uncommitted write-set (§4.2, §5).
    pub fn purge_trxs_upto(&self, seqno: i64) {
        let bound = {
            let committed = self.committed.lock();
            match committed.iter().find(|&(_, &c)| !c) {
                Some((&lowest_uncommitted, _)) => seqno.min(lowest_uncommitted),
                None => seqno,
            }
        };
        self.purge_below(bound);
    }

    fn purge_below(&self, seqno: i64) {
        self.index.retain(|_, entry| entry.last_writer_seqno >= seqno);
        let mut committed = self.committed.lock();
        let keep = committed.split_off(&seqno);
        *committed = keep;
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
