// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use syncrepl_core::{Gtid, Result, TrxWriteSet};

/// A cluster membership view delivered on a configuration change
/// (§4.3 `process_conf_change`).
#[derive(Debug, Clone)]
pub struct View {
    pub group: uuid::Uuid,
    pub members: Vec<uuid::Uuid>,
    pub primary: bool,
    pub local_seqno: i64,
    pub group_seqno: i64,
}

/// An action delivered by the group communication service's total
/// order stream (§4.3 `async_recv`, §6 action source).
#[derive(Debug, Clone)]
pub enum Action {
    WriteSet { local_seqno: i64, global_seqno: i64, write_set: TrxWriteSet },
    CommitCut(i64),
    ViewChange(View),
    Join(Gtid),
    Sync,
}

/// The group communication service collaborator (§6): totally
/// orders write-sets across the cluster and delivers view changes.
/// An external collaborator; this crate depends only on the
/// operations the replicator drives directly.
pub trait Gcs: Send + Sync {
    /// Submits `ws` for total-order delivery, blocking until GCS
    /// assigns it a position. Returns `(local_seqno, global_seqno)`.
    fn replv(&self, ws: &TrxWriteSet) -> Result<(i64, i64)>;

    /// Submits a preordered action that bypasses certification
    /// (§9b `preordered_collect`/`preordered_commit`).
    fn sendv_preordered(&self, data: Vec<u8>) -> Result<i64>;

    /// Interrupts a `replv` call in flight for `local_seqno`, used by
    /// `abort_trx` on a trx still replicating (§4.3 abort table).
    fn interrupt(&self, local_seqno: i64);

    /// A causality fence: the highest seqno guaranteed to have been
    /// observed cluster-wide at the moment of the call.
    fn caused(&self) -> Result<Gtid>;

    fn request_state_transfer(&self, donor: Option<String>) -> Result<()>;

    /// Reports the highest seqno this node has committed, for flow
    /// control purposes (§4.5 service thread).
    fn set_last_applied(&self, seqno: i64);

    fn close(&self);
}

/// Pulls ordered [`Action`]s from GCS for the replicator's
/// `async_recv` loop (§4.3). Implementations deliver `Err` only on
/// unrecoverable transport failure; a normal close is signalled by
/// the dedicated shutdown path the embedder wires up, not by this
/// trait.
pub trait ActionSource: Send {
    fn recv(&self) -> Result<Action>;
}
