// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::Order;
use syncrepl_core::CommitOrderMode;

/// Local monitor predicate: strict FIFO in delivery order (§4.1).
#[derive(Debug, Clone, Copy)]
pub struct LocalOrder {
    pub seqno: i64,
}

impl Order for LocalOrder {
    fn seqno(&self) -> i64 {
        self.seqno
    }

    fn ready(&self, _last_entered: i64, last_left: i64) -> bool {
        last_left + 1 == self.seqno
    }
}

/// Apply monitor predicate: a local trx may always proceed; a remote
/// trx waits for its certified dependency to have committed (§4.1).
#[derive(Debug, Clone, Copy)]
pub struct ApplyOrder {
    pub seqno: i64,
    pub depends_seqno: i64,
    pub is_local: bool,
}

impl Order for ApplyOrder {
    fn seqno(&self) -> i64 {
        self.seqno
    }

    fn ready(&self, _last_entered: i64, last_left: i64) -> bool {
        self.is_local || last_left >= self.depends_seqno
    }
}

/// `CommitOrderDecision` mirrors `CommitOrderMode` as the predicate's
/// own copy, since the monitor is generic over `Order` and cannot
/// reach back into a shared `Config`.
pub type CommitOrderDecision = CommitOrderMode;

/// Commit monitor predicate (§4.1). `Bypass` is never checked by the
/// monitor: callers in bypass mode skip commit-monitor admission
/// entirely (§9's note on `sync_wait` under `BYPASS`).
#[derive(Debug, Clone, Copy)]
pub struct CommitOrder {
    pub seqno: i64,
    pub is_local: bool,
    pub mode: CommitOrderDecision,
}

impl Order for CommitOrder {
    fn seqno(&self) -> i64 {
        self.seqno
    }

    fn ready(&self, _last_entered: i64, last_left: i64) -> bool {
        match self.mode {
            CommitOrderDecision::Bypass => true,
            CommitOrderDecision::Ooooc => true,
            CommitOrderDecision::LocalOoooc => self.is_local || last_left + 1 == self.seqno,
            CommitOrderDecision::NoOoooc => last_left + 1 == self.seqno,
        }
    }
}
