// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use syncrepl_core::TrxWriteSet;

/// The host's append-only, seqno-ordered write-set cache (§6). An
/// external collaborator: this crate only depends on the read path
/// IST needs.
pub trait GCache: Send + Sync {
    /// Oldest `global_seqno` still retained, or `i64::MAX` if empty.
    fn first_seqno(&self) -> i64;

    fn get(&self, seqno: i64) -> Option<TrxWriteSet>;

    /// Releases the entry at `seqno`, once the service thread reports
    /// it as safe to drop (§4.5). Default no-op: a collaborator with
    /// its own retention policy (e.g. a ring buffer) may ignore this
    /// hint entirely.
    fn release(&self, _seqno: i64) {}
}
