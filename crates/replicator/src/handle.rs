// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use parking_lot::Mutex;
use syncrepl_core::{TrxFlags, TrxState, TrxWriteSet};
use uuid::Uuid;

/// In-memory descriptor of a transaction as it moves through
/// replicate → certify → apply → commit (§3). A handle is mutated by
/// its owning applier thread, except for the flip to `MustAbort`
/// which another thread may drive during BF-abort; that flip is
/// guarded by the handle's own mutex.
pub struct TrxHandle {
    pub source_id: Uuid,
    pub trx_id: u64,
    pub conn_id: u64,
    pub local_seqno: Mutex<Option<i64>>,
    pub global_seqno: Mutex<Option<i64>>,
    pub last_seen_seqno: i64,
    pub depends_seqno: Mutex<i64>,
    pub write_set: Mutex<TrxWriteSet>,
    state: Mutex<TrxState>,
    pub is_local: bool,
}

impl TrxHandle {
    pub fn new_local(write_set: TrxWriteSet) -> Self {
        Self {
            source_id: write_set.source_id,
            trx_id: write_set.trx_id,
            conn_id: write_set.conn_id,
            last_seen_seqno: write_set.last_seen_seqno,
            depends_seqno: Mutex::new(-1),
            local_seqno: Mutex::new(None),
            global_seqno: Mutex::new(None),
            write_set: Mutex::new(write_set),
            state: Mutex::new(TrxState::Executing),
            is_local: true,
        }
    }

    pub fn new_remote(local_seqno: i64, global_seqno: i64, write_set: TrxWriteSet) -> Self {
        Self {
            source_id: write_set.source_id,
            trx_id: write_set.trx_id,
            conn_id: write_set.conn_id,
            last_seen_seqno: write_set.last_seen_seqno,
            depends_seqno: Mutex::new(-1),
            local_seqno: Mutex::new(Some(local_seqno)),
            global_seqno: Mutex::new(Some(global_seqno)),
            write_set: Mutex::new(write_set),
            state: Mutex::new(TrxState::Certifying),
            is_local: false,
        }
    }

    pub fn state(&self) -> TrxState {
        *self.state.lock()
    }

    pub fn set_state(&self, next: TrxState) {
        *self.state.lock() = next;
    }

    /// Flips the handle to `MustAbort` from whatever state it is in,
    /// unless it is already terminal or aborting. Returns the state
    /// the victim was in at the moment of the flip, which the caller
    /// uses to decide which collaborator to interrupt (§4.3 table).
    pub fn mark_must_abort(&self) -> TrxState {
        let mut st = self.state.lock();
        if st.is_terminal() || matches!(*st, TrxState::MustAbort | TrxState::Aborting) {
            return *st;
        }
        let previous = *st;
        *st = TrxState::MustAbort;
        previous
    }

    pub fn global_seqno_or(&self, default: i64) -> i64 {
        self.global_seqno.lock().unwrap_or(default)
    }

    pub fn local_seqno_or(&self, default: i64) -> i64 {
        self.local_seqno.lock().unwrap_or(default)
    }

    pub fn flags(&self) -> TrxFlags {
        self.write_set.lock().flags
    }

    pub fn is_toi(&self) -> bool {
        self.write_set.lock().is_toi()
    }
}
