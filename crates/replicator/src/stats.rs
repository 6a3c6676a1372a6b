// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Atomic counters exposed through `stats_get`/`stats_reset` (§9b).
#[derive(Default)]
pub struct Stats {
    pub replicated: AtomicU64,
    pub replicated_bytes: AtomicU64,
    pub local_commits: AtomicU64,
    pub local_rollbacks: AtomicU64,
    pub local_cert_failures: AtomicU64,
    pub local_replays: AtomicU64,
    pub causal_reads: AtomicU64,
    pub last_committed_seqno: AtomicI64,
}

/// A point-in-time, named snapshot of [`Stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub replicated: u64,
    pub replicated_bytes: u64,
    pub local_commits: u64,
    pub local_rollbacks: u64,
    pub local_cert_failures: u64,
    pub local_replays: u64,
    pub causal_reads: u64,
    pub last_committed_seqno: i64,
}

impl Stats {
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            replicated: self.replicated.load(Ordering::Relaxed),
            replicated_bytes: self.replicated_bytes.load(Ordering::Relaxed),
            local_commits: self.local_commits.load(Ordering::Relaxed),
            local_rollbacks: self.local_rollbacks.load(Ordering::Relaxed),
            local_cert_failures: self.local_cert_failures.load(Ordering::Relaxed),
            local_replays: self.local_replays.load(Ordering::Relaxed),
            causal_reads: self.causal_reads.load(Ordering::Relaxed),
            last_committed_seqno: self.last_committed_seqno.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        self.replicated.store(0, Ordering::Relaxed);
        self.replicated_bytes.store(0, Ordering::Relaxed);
        self.local_commits.store(0, Ordering::Relaxed);
        self.local_rollbacks.store(0, Ordering::Relaxed);
        self.local_cert_failures.store(0, Ordering::Relaxed);
        self.local_replays.store(0, Ordering::Relaxed);
        self.causal_reads.store(0, Ordering::Relaxed);
        // last_committed_seqno is a position, not a count; it survives a reset.
    }
}
