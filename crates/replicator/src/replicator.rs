// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::gcs::{Gcs, View};
use crate::handle::TrxHandle;
use crate::saved_state::SavedState;
use crate::service::{ServiceTask, ServiceThread};
use crate::stats::{Stats, StatsSnapshot};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use syncrepl_certification::{CertOutcome, Certification};
use syncrepl_core::{CommitOrderMode, Config, Error, Gtid, NodeState, Result, TrxState};
use syncrepl_ist::{can_serve, AsyncSenderMap, GCache};
use syncrepl_monitor::{ApplyOrder, CommitOrder, LocalOrder, Monitor};
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// The host database's apply/commit hooks (§6 provider-to-host
/// callbacks). The replicator is the sole driver of this trait; a
/// concrete host implementation is an external collaborator (§1).
pub trait EventObserver: Send + Sync {
    fn apply(&self, write_set: &syncrepl_core::TrxWriteSet) -> Result<()>;
    fn unordered(&self, data: &[u8]) -> Result<()>;
    /// Called on every view change. Returning `Some(donor)` requests
    /// a state transfer from that donor (or any donor, if `None`'s
    /// peer chooses); returning `None` means the node is already
    /// current.
    fn view(&self, view: &View) -> Option<Option<String>>;
    fn synced(&self) {}
}

/// Where a registered in-flight local trx is, relative to the
/// monitor slots `pre_commit_inner` may be blocked entering or may
/// already hold. A non-primary view change needs this to release
/// exactly what's held rather than guessing from `TrxState` alone,
/// which can't tell "blocked inside `enter`" from "already entered".
mod stage {
    pub const BEFORE_LOCAL: u8 = 0;
    pub const BEFORE_APPLY: u8 = 1;
    pub const BEFORE_COMMIT: u8 = 2;
    pub const DONE: u8 = 3;
}

/// A local trx registered between `pre_commit` and
/// `commit_trx`/`rollback_trx`, plus the stage marker
/// `process_conf_change` needs to abort it cleanly.
struct InFlight {
    handle: Arc<TrxHandle>,
    stage: Arc<AtomicU8>,
}

/// The replicator state machine (§4.3): glues the node FSM, the
/// three ordered monitors, certification and IST together behind the
/// provider API the host database drives.
pub struct Replicator {
    config: RwLock<Config>,
    node_state: Mutex<NodeState>,
    group: Mutex<Uuid>,
    gcs: Arc<dyn Gcs>,
    gcache: Arc<dyn GCache>,
    certification: Certification,
    local_monitor: Monitor<LocalOrder>,
    apply_monitor: Monitor<ApplyOrder>,
    commit_monitor: Monitor<CommitOrder>,
    saved_state: SavedState,
    stats: Stats,
    sender_map: AsyncSenderMap,
    corrupt: Mutex<bool>,
    preorder_seq: Mutex<i64>,
    preorder_buffers: Mutex<HashMap<i64, Vec<u8>>>,
    source_id: Uuid,
    /// Drives the deferred flow-control report and gcache release
    /// (§4.5); spawned alongside the replicator and joined on drop.
    service: ServiceThread,
    /// Local transactions currently past `pre_commit`, so a
    /// non-primary view change can terminate them (§8 P7/S5) instead
    /// of leaving them blocked on a monitor that will never open.
    local_registry: Mutex<HashMap<(Uuid, u64), InFlight>>,
}

impl Replicator {
    pub fn new(config: Config, gcs: Arc<dyn Gcs>, gcache: Arc<dyn GCache>, saved_state: SavedState) -> Arc<Self> {
        Self::new_with_source_id(config, gcs, gcache, saved_state, Uuid::new_v4())
    }

    pub fn new_with_source_id(
        config: Config,
        gcs: Arc<dyn Gcs>,
        gcache: Arc<dyn GCache>,
        saved_state: SavedState,
        source_id: Uuid,
    ) -> Arc<Self> {
        let group = saved_state.gtid().group;
        let initial_seqno = saved_state.gtid().seqno;
        let certification = Certification::new();
        certification.set_proto_max(config.proto_max);
        let gcache_for_release = Arc::clone(&gcache);
        let service = ServiceThread::spawn(Arc::clone(&gcs), move |seqno| gcache_for_release.release(seqno));
        Arc::new(Self {
            config: RwLock::new(config),
            node_state: Mutex::new(NodeState::Closed),
            group: Mutex::new(group),
            gcs,
            gcache,
            certification,
            local_monitor: Monitor::new(group, initial_seqno),
            apply_monitor: Monitor::new(group, initial_seqno),
            commit_monitor: Monitor::new(group, initial_seqno),
            saved_state,
            stats: Stats::default(),
            sender_map: AsyncSenderMap::new(),
            corrupt: Mutex::new(false),
            preorder_seq: Mutex::new(0),
            preorder_buffers: Mutex::new(HashMap::new()),
            source_id,
            service,
            local_registry: Mutex::new(HashMap::new()),
        })
    }

    pub fn node_state(&self) -> NodeState {
        *self.node_state.lock()
    }

    pub fn source_id(&self) -> Uuid {
        self.source_id
    }

    /// The highest GTID this node has durably committed (§6
    /// `last_committed_id`).
    pub fn last_committed_id(&self) -> Gtid {
        self.saved_state.gtid()
    }

    /// Records that this node donated state up to `seqno` to a
    /// joiner (§6 `sst_sent`); purely informational bookkeeping, the
    /// donor keeps applying throughout.
    pub fn sst_sent(&self, seqno: i64) {
        info!(seqno, "state transfer donated up to seqno");
    }

    /// Records that this node received a full state transfer landing
    /// it at `gtid` (§6 `sst_received`): persists the position and
    /// rebases every monitor's initial watermark to it, since an SST
    /// (unlike IST) replaces local history rather than extending it.
    pub fn sst_received(&self, gtid: Gtid) -> Result<()> {
        self.saved_state.commit(gtid).map_err(|e| Error::Fatal(e.to_string()))?;
        self.certification.assign_initial_position(gtid.seqno);
        self.local_monitor.set_initial_position(gtid.group, gtid.seqno);
        self.apply_monitor.set_initial_position(gtid.group, gtid.seqno);
        self.commit_monitor.set_initial_position(gtid.group, gtid.seqno);
        *self.group.lock() = gtid.group;
        Ok(())
    }

    /// Drains the action source for as long as the node is open,
    /// dispatching each delivered [`Action`] (§6 `async_recv`).
    /// Intended to run on its own thread; returns once the source
    /// reports an unrecoverable transport error or the node closes.
    pub fn async_recv(&self, source: &dyn crate::gcs::ActionSource, observer: &dyn EventObserver) -> Result<()> {
        use crate::gcs::Action;
        while self.node_state() != NodeState::Closed {
            let action = source.recv()?;
            match action {
                Action::WriteSet { local_seqno, global_seqno, write_set } => {
                    let handle = TrxHandle::new_remote(local_seqno, global_seqno, write_set);
                    if let Err(e) = self.apply_trx(&handle, observer) {
                        warn!(error = %e, local_seqno, global_seqno, "failed to apply a remote write-set");
                    }
                }
                Action::CommitCut(seqno) => {
                    self.certification.purge_trxs_upto(seqno);
                }
                Action::ViewChange(view) => {
                    self.process_conf_change(&view, observer)?;
                }
                Action::Join(gtid) => {
                    self.sst_received(gtid)?;
                }
                Action::Sync => {
                    self.transition(NodeState::Synced);
                    observer.synced();
                }
            }
        }
        Ok(())
    }

    fn transition(&self, next: NodeState) {
        let mut st = self.node_state.lock();
        if st.can_transition_to(next) {
            info!(from = %*st, to = %next, "node state transition");
            *st = next;
        } else {
            warn!(from = %*st, to = %next, "rejected illegal node state transition");
        }
    }

    pub fn is_corrupt(&self) -> bool {
        *self.corrupt.lock()
    }

    /// Marks the node corrupt and begins an unrecoverable shutdown
    /// (§7 corruption protocol). `reason` is logged, not returned.
    fn mark_corrupt_and_close(&self, reason: &str) {
        warn!(reason, "node marking itself corrupt");
        *self.corrupt.lock() = true;
        let _ = self.saved_state.mark_unsafe();
        self.transition(NodeState::Closed);
        self.gcs.close();
    }

    #[instrument(name = "connect", level = "info", skip(self))]
    pub fn connect(&self, bootstrap: bool) -> Result<()> {
        if bootstrap && !self.saved_state.safe_to_bootstrap() {
            return Err(Error::NodeFail("not safe to bootstrap: prior shutdown was unclean".into()));
        }
        self.transition(NodeState::Connected);
        Ok(())
    }

    #[instrument(name = "close", level = "info", skip(self))]
    pub fn close(&self) {
        if self.node_state() == NodeState::Closed {
            return;
        }
        self.sender_map.cancel_all();
        self.local_monitor.close();
        self.apply_monitor.close();
        self.commit_monitor.close();
        self.gcs.close();
        self.transition(NodeState::Closed);
    }

    fn commit_mode(&self) -> CommitOrderMode {
        self.config.read().commit_order
    }

    /// Replicates a local write-set (§4.3). Requires the node to
    /// have joined the cluster. On success the handle carries its
    /// assigned local/global seqno; on `BfAbort`/`ConnFail`, both
    /// monitor slots for the assigned seqno (if any) are cancelled.
    #[instrument(name = "replicate", level = "trace", skip(self, handle))]
    pub fn replicate(&self, handle: &TrxHandle) -> Result<()> {
        if !matches!(self.node_state(), NodeState::Joined | NodeState::Synced | NodeState::Donor) {
            return Err(Error::ConnFail("node has not joined the cluster".into()));
        }
        handle.set_state(TrxState::Replicating);
        let max_size = self.config.read().max_write_set_size;
        let actual_size = handle.write_set.lock().data.len();
        if actual_size > max_size {
            return Err(Error::SizeExceeded { max: max_size, actual: actual_size });
        }

        let ws = handle.write_set.lock().clone();
        let (local_seqno, global_seqno) = match self.gcs.replv(&ws) {
            Ok(pair) => pair,
            Err(e) => {
                handle.set_state(TrxState::RolledBack);
                return Err(e);
            }
        };
        *handle.local_seqno.lock() = Some(local_seqno);
        *handle.global_seqno.lock() = Some(global_seqno);
        self.stats.replicated.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        self.stats.replicated_bytes.fetch_add(actual_size as u64, std::sync::atomic::Ordering::Relaxed);

        if handle.state() == TrxState::MustAbort || ws.is_rollback() {
            self.local_monitor.self_cancel(local_seqno);
            self.apply_monitor.self_cancel(global_seqno);
            if self.commit_mode() != CommitOrderMode::Bypass {
                self.commit_monitor.self_cancel(global_seqno);
            }
            handle.set_state(TrxState::RolledBack);
            return Err(Error::ConnFail("transaction rolled back during replication".into()));
        }
        handle.set_state(TrxState::Certifying);
        Ok(())
    }

    /// Certifies and enters the apply (and, for local trx, commit)
    /// monitor (§4.3). A BF-abort interruption while waiting on
    /// either monitor transitions the handle to the matching replay
    /// state and returns `BfAbort`. Registers the handle as in-flight
    /// for the duration, so a non-primary view change can terminate
    /// it (§8 P7/S5) instead of leaving it blocked forever.
    #[instrument(name = "pre_commit", level = "trace", skip(self, handle))]
    pub fn pre_commit(&self, handle: &Arc<TrxHandle>) -> Result<()> {
        let local_seqno = handle.local_seqno_or(-1);
        let global_seqno = handle.global_seqno_or(-1);
        let key = (handle.source_id, handle.trx_id);
        let stage = Arc::new(AtomicU8::new(stage::BEFORE_LOCAL));
        self.local_registry.lock().insert(key, InFlight { handle: Arc::clone(handle), stage: Arc::clone(&stage) });

        let result = self.pre_commit_inner(handle, local_seqno, global_seqno, &stage);
        if result.is_err() {
            self.local_registry.lock().remove(&key);
        }
        result
    }

    fn pre_commit_inner(&self, handle: &TrxHandle, local_seqno: i64, global_seqno: i64, stage: &AtomicU8) -> Result<()> {
        self.local_monitor.enter(&LocalOrder { seqno: local_seqno })?;
        stage.store(stage::BEFORE_APPLY, Ordering::Release);

        let ws = handle.write_set.lock().clone();
        let (outcome, depends_seqno) = self.certification.append_trx(&ws, global_seqno);
        self.local_monitor.leave(&LocalOrder { seqno: local_seqno });

        if outcome == CertOutcome::TestFailed {
            self.stats.local_cert_failures.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            handle.set_state(TrxState::Aborting);
            self.apply_monitor.self_cancel(global_seqno);
            if self.commit_mode() != CommitOrderMode::Bypass {
                self.commit_monitor.self_cancel(global_seqno);
            }
            return Err(Error::TrxFail);
        }
        *handle.depends_seqno.lock() = depends_seqno;
        handle.set_state(TrxState::Applying);

        let apply_order = ApplyOrder { seqno: global_seqno, depends_seqno, is_local: handle.is_local };
        if self.apply_monitor.enter(&apply_order).is_err() {
            handle.set_state(TrxState::MustReplayAm);
            return Err(Error::BfAbort);
        }
        stage.store(stage::BEFORE_COMMIT, Ordering::Release);

        if handle.is_local {
            handle.set_state(TrxState::Committing);
            let mode = self.commit_mode();
            let commit_order = CommitOrder { seqno: global_seqno, is_local: true, mode };
            if mode != CommitOrderMode::Bypass && self.commit_monitor.enter(&commit_order).is_err() {
                handle.set_state(TrxState::MustReplayCm);
                return Err(Error::BfAbort);
            }
        }
        stage.store(stage::DONE, Ordering::Release);
        Ok(())
    }

    /// Finalizes a local transaction after the host has committed its
    /// effects to the database (§4.3): releases both monitor slots,
    /// marks the certification index's watermark and records stats.
    pub fn commit_trx(&self, handle: &TrxHandle) {
        let global_seqno = handle.global_seqno_or(-1);
        let depends_seqno = *handle.depends_seqno.lock();
        let mode = self.commit_mode();
        if mode != CommitOrderMode::Bypass {
            self.commit_monitor.leave(&CommitOrder { seqno: global_seqno, is_local: true, mode });
        }
        self.apply_monitor.leave(&ApplyOrder { seqno: global_seqno, depends_seqno, is_local: true });
        self.certification.set_trx_committed(global_seqno);
        handle.set_state(TrxState::Committed);
        self.stats.local_commits.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        self.local_registry.lock().remove(&(handle.source_id, handle.trx_id));
        self.service.submit(ServiceTask::ReportLastCommitted(global_seqno));
        self.service.submit(ServiceTask::ReleaseGcacheSeqno(global_seqno));
    }

    /// Finalizes a local transaction the host decided to roll back
    /// after `pre_commit` succeeded (e.g. a deadlock found by the
    /// storage engine); releases whichever monitor slots were held.
    pub fn rollback_trx(&self, handle: &TrxHandle) {
        let global_seqno = handle.global_seqno_or(-1);
        let mode = self.commit_mode();
        if mode != CommitOrderMode::Bypass {
            self.commit_monitor.self_cancel(global_seqno);
        }
        self.apply_monitor.self_cancel(global_seqno);
        handle.set_state(TrxState::RolledBack);
        self.stats.local_rollbacks.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        self.local_registry.lock().remove(&(handle.source_id, handle.trx_id));
    }

    /// Certifies and applies a remote or TOI transaction delivered by
    /// `async_recv` (§4.3). For non-TOI trx, the commit monitor is
    /// entered/left by the host via
    /// `applier_pre_commit`/`applier_post_commit`, not here.
    #[instrument(name = "apply_trx", level = "trace", skip(self, handle, observer))]
    pub fn apply_trx(&self, handle: &TrxHandle, observer: &dyn EventObserver) -> Result<()> {
        let local_seqno = handle.local_seqno_or(-1);
        let global_seqno = handle.global_seqno_or(-1);

        self.local_monitor.enter(&LocalOrder { seqno: local_seqno })?;
        let ws = handle.write_set.lock().clone();
        let (outcome, depends_seqno) = self.certification.append_trx(&ws, global_seqno);
        self.local_monitor.leave(&LocalOrder { seqno: local_seqno });

        if outcome == CertOutcome::TestFailed {
            handle.set_state(TrxState::Aborting);
            self.apply_monitor.self_cancel(global_seqno);
            return Err(Error::TrxFail);
        }
        *handle.depends_seqno.lock() = depends_seqno;

        let apply_order = ApplyOrder { seqno: global_seqno, depends_seqno, is_local: false };
        if self.apply_monitor.enter(&apply_order).is_err() {
            handle.set_state(TrxState::MustReplayAm);
            return Err(Error::BfAbort);
        }
        handle.set_state(TrxState::Applying);

        let is_toi = handle.is_toi();
        if is_toi {
            let mode = self.commit_mode();
            let commit_order = CommitOrder { seqno: global_seqno, is_local: false, mode };
            if mode != CommitOrderMode::Bypass && self.commit_monitor.enter(&commit_order).is_err() {
                handle.set_state(TrxState::MustReplayCm);
                return Err(Error::BfAbort);
            }
        }

        let ws = handle.write_set.lock().clone();
        let apply_result = observer.apply(&ws);
        match apply_result {
            Ok(()) => {
                handle.set_state(TrxState::Committed);
                if is_toi {
                    self.commit_monitor.leave(&CommitOrder { seqno: global_seqno, is_local: false, mode: self.commit_mode() });
                }
                self.apply_monitor.leave(&apply_order);
                self.certification.set_trx_committed(global_seqno);
                self.service.submit(ServiceTask::ReportLastCommitted(global_seqno));
                self.service.submit(ServiceTask::ReleaseGcacheSeqno(global_seqno));
                Ok(())
            }
            Err(e) => {
                handle.set_state(TrxState::Aborting);
                self.apply_monitor.leave(&apply_order);
                if is_toi {
                    self.commit_monitor.self_cancel(global_seqno);
                } else {
                    self.mark_corrupt_and_close("apply callback failed for a non-isolation transaction");
                }
                Err(e)
            }
        }
    }

    /// Releases the commit monitor early, before the apply monitor
    /// slot is released, so a following non-conflicting applier can
    /// start committing while this one still finishes applying
    /// (§9b interim-commit handoff).
    pub fn applier_pre_commit(&self, handle: &TrxHandle) -> Result<()> {
        let global_seqno = handle.global_seqno_or(-1);
        let mode = self.commit_mode();
        if mode == CommitOrderMode::Bypass {
            return Ok(());
        }
        self.commit_monitor
            .enter(&CommitOrder { seqno: global_seqno, is_local: handle.is_local, mode })
            .map_err(|_| {
                handle.set_state(TrxState::MustReplayCm);
                Error::BfAbort
            })
    }

    pub fn applier_interim_commit(&self, handle: &TrxHandle) {
        let global_seqno = handle.global_seqno_or(-1);
        let mode = self.commit_mode();
        if mode != CommitOrderMode::Bypass {
            self.commit_monitor.leave(&CommitOrder { seqno: global_seqno, is_local: handle.is_local, mode });
        }
    }

    pub fn applier_post_commit(&self, handle: &TrxHandle) {
        self.applier_interim_commit(handle);
    }

    /// Brute-force aborts `victim`, interrupting whichever
    /// collaborator currently holds it (§4.3 abort table).
    #[instrument(name = "abort_trx", level = "trace", skip(self, victim))]
    pub fn abort_trx(&self, victim: &TrxHandle) {
        let previous = victim.mark_must_abort();
        let local_seqno = victim.local_seqno_or(-1);
        let global_seqno = victim.global_seqno_or(-1);
        match previous {
            TrxState::Executing => {}
            TrxState::Replicating => self.gcs.interrupt(local_seqno),
            TrxState::Certifying => self.local_monitor.interrupt(local_seqno),
            TrxState::Applying => self.apply_monitor.interrupt(global_seqno),
            TrxState::Committing if self.commit_mode() != CommitOrderMode::Bypass => {
                self.commit_monitor.interrupt(global_seqno);
            }
            _ => {}
        }
    }

    /// Replays a transaction preempted by BF-abort (§4.3). Re-enters
    /// whichever monitor it had not already passed, then reapplies
    /// the write-set.
    #[instrument(name = "replay_trx", level = "trace", skip(self, handle, observer))]
    pub fn replay_trx(&self, handle: &TrxHandle, observer: &dyn EventObserver) -> Result<()> {
        if !handle.state().must_replay() {
            return Err(Error::TrxFail);
        }
        let global_seqno = handle.global_seqno_or(-1);
        self.stats.local_replays.fetch_add(1, std::sync::atomic::Ordering::Relaxed);

        if handle.state() == TrxState::MustCertAndReplay {
            let ws = handle.write_set.lock().clone();
            let (outcome, depends_seqno) = self.certification.test(&ws, global_seqno);
            if outcome == CertOutcome::TestFailed {
                handle.set_state(TrxState::Aborting);
                return Err(Error::TrxFail);
            }
            *handle.depends_seqno.lock() = depends_seqno;
        }

        let depends_seqno = *handle.depends_seqno.lock();
        if !self.apply_monitor.entered(global_seqno) {
            let order = ApplyOrder { seqno: global_seqno, depends_seqno, is_local: handle.is_local };
            self.apply_monitor.enter(&order)?;
        }
        let mode = self.commit_mode();
        if mode != CommitOrderMode::Bypass && !self.commit_monitor.entered(global_seqno) {
            self.commit_monitor.enter(&CommitOrder { seqno: global_seqno, is_local: handle.is_local, mode })?;
        }

        handle.set_state(TrxState::Replaying);
        let ws = handle.write_set.lock().clone();
        match observer.apply(&ws) {
            Ok(()) => {
                handle.set_state(TrxState::Committed);
                self.apply_monitor.leave(&ApplyOrder { seqno: global_seqno, depends_seqno, is_local: handle.is_local });
                if mode != CommitOrderMode::Bypass {
                    self.commit_monitor.leave(&CommitOrder { seqno: global_seqno, is_local: handle.is_local, mode });
                }
                self.certification.set_trx_committed(global_seqno);
                self.service.submit(ServiceTask::ReportLastCommitted(global_seqno));
                self.service.submit(ServiceTask::ReleaseGcacheSeqno(global_seqno));
                Ok(())
            }
            Err(e) => {
                self.mark_corrupt_and_close("apply failed during replay");
                Err(e)
            }
        }
    }

    /// Obtains a causality fence and waits for it locally (§4.3).
    pub fn sync_wait(&self, upto: Option<Gtid>) -> Result<()> {
        let gtid = match upto {
            Some(g) => g,
            None => self.gcs.caused()?,
        };
        self.stats.causal_reads.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        if self.commit_mode() == CommitOrderMode::Bypass {
            self.apply_monitor.wait(&gtid)
        } else {
            self.commit_monitor.wait(&gtid)
        }
    }

    /// Drains to the certification index's position and persists it
    /// as the saved state, without stopping replication (§9b).
    pub fn pause(&self) -> Result<Gtid> {
        let local_seqno = self.local_monitor.last_left();
        self.local_monitor.enter(&LocalOrder { seqno: local_seqno + 1 }).or(Ok::<(), Error>(()))?;
        let target = self.certification.position();
        self.apply_monitor.drain(target);
        self.commit_monitor.drain(target);
        let gtid = Gtid::new(*self.group.lock(), target);
        self.saved_state.commit(gtid).map_err(|e| Error::Fatal(e.to_string()))?;
        Ok(gtid)
    }

    pub fn resume(&self) {
        let seqno = self.local_monitor.last_left() + 1;
        self.local_monitor.self_cancel(seqno);
    }

    #[instrument(name = "desync", level = "info", skip(self))]
    pub fn desync(&self) {
        self.transition(NodeState::Donor);
    }

    #[instrument(name = "resync", level = "info", skip(self))]
    pub fn resync(&self) {
        self.transition(NodeState::Joined);
        self.transition(NodeState::Synced);
    }

    /// Begins a schema-level isolated action: certifies, enters both
    /// monitors, marks the saved state UNSAFE for the duration (§4.3,
    /// §9b).
    pub fn to_isolation_begin(&self, handle: &Arc<TrxHandle>) -> Result<()> {
        self.saved_state.mark_unsafe().map_err(|e| Error::Fatal(e.to_string()))?;
        self.pre_commit(handle)
    }

    pub fn to_isolation_end(&self, handle: &TrxHandle, observer: &dyn EventObserver) -> Result<()> {
        let result = self.apply_trx(handle, observer);
        if result.is_ok() {
            let gtid = Gtid::new(*self.group.lock(), handle.global_seqno_or(-1));
            self.saved_state.commit(gtid).map_err(|e| Error::Fatal(e.to_string()))?;
        }
        result
    }

    /// Handles a view change (§4.3): drains in-flight local
    /// transactions, asks the observer whether a state transfer is
    /// needed, and picks IST or SST.
    #[instrument(name = "process_conf_change", level = "info", skip(self, view, observer))]
    pub fn process_conf_change(&self, view: &View, observer: &dyn EventObserver) -> Result<()> {
        if !view.primary {
            // A trx in `local_registry` may be blocked trying to enter a
            // monitor, or may already hold one past it — `stage` (not
            // `TrxState`, which can't tell the two apart) says which, so
            // we interrupt what's blocked and release what's held rather
            // than guessing. Draining first would wait on a watermark
            // these slots themselves are blocking, so this runs before
            // the drain below (§8 P7/S5).
            let in_flight: Vec<InFlight> = self.local_registry.lock().drain().map(|(_, v)| v).collect();
            let mode = self.commit_mode();
            for victim in &in_flight {
                let handle = &victim.handle;
                warn!(trx_id = handle.trx_id, "aborting in-flight local transaction on non-primary view change");
                handle.mark_must_abort();
                let local_seqno = handle.local_seqno_or(-1);
                let global_seqno = handle.global_seqno_or(-1);
                let depends_seqno = *handle.depends_seqno.lock();
                match victim.stage.load(Ordering::Acquire) {
                    stage::BEFORE_LOCAL => self.local_monitor.interrupt(local_seqno),
                    stage::BEFORE_APPLY => self.apply_monitor.interrupt(global_seqno),
                    stage::BEFORE_COMMIT => {
                        if mode != CommitOrderMode::Bypass {
                            self.commit_monitor.interrupt(global_seqno);
                        }
                        self.apply_monitor.leave(&ApplyOrder { seqno: global_seqno, depends_seqno, is_local: true });
                    }
                    _ => {
                        if mode != CommitOrderMode::Bypass {
                            self.commit_monitor.self_cancel(global_seqno);
                        }
                        self.apply_monitor.leave(&ApplyOrder { seqno: global_seqno, depends_seqno, is_local: true });
                    }
                }
            }
            self.local_monitor.drain(view.local_seqno);
            self.apply_monitor.drain(self.certification.position());
            self.commit_monitor.drain(self.certification.position());
            self.transition(NodeState::Connected);
            return Ok(());
        }

        self.local_monitor.drain(view.local_seqno);
        self.apply_monitor.drain(self.certification.position());
        self.commit_monitor.drain(self.certification.position());

        match observer.view(view) {
            None => {
                self.transition(NodeState::Synced);
                observer.synced();
                Ok(())
            }
            Some(donor) => {
                self.transition(NodeState::Joining);
                self.request_state_transfer(view, donor)?;
                self.transition(NodeState::Joined);
                self.transition(NodeState::Synced);
                observer.synced();
                Ok(())
            }
        }
    }

    fn request_state_transfer(&self, view: &View, donor: Option<String>) -> Result<()> {
        let first = self.certification.position() + 1;
        let last = view.group_seqno;
        if first > last {
            return Ok(());
        }
        if can_serve(self.gcache.as_ref(), first) {
            info!(first, last, "state transfer satisfied via IST");
            Ok(())
        } else {
            info!(first, last, "gcache cannot cover the gap, falling back to SST");
            self.gcs.request_state_transfer(donor)
        }
    }

    /// Buffers `data` under a private monotonic id, bypassing
    /// certification entirely (§9b preordered path for e.g. NBO or
    /// other externally-ordered streams).
    pub fn preordered_collect(&self, data: Vec<u8>) -> i64 {
        let id = {
            let mut seq = self.preorder_seq.lock();
            *seq += 1;
            *seq
        };
        self.preorder_buffers.lock().insert(id, data);
        id
    }

    /// Hands the buffer previously collected under `id` to GCS as a
    /// single preordered action, then delivers it through the
    /// unordered callback rather than the apply/commit monitors.
    pub fn preordered_commit(&self, id: i64, observer: &dyn EventObserver) -> Result<()> {
        let data = self
            .preorder_buffers
            .lock()
            .remove(&id)
            .ok_or_else(|| Error::NotFound(format!("preordered buffer {id}")))?;
        self.gcs.sendv_preordered(data.clone())?;
        observer.unordered(&data)
    }

    pub fn stats_get(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    pub fn stats_reset(&self) {
        self.stats.reset()
    }

    pub fn param_set(&self, key: &str, value: syncrepl_core::ParamValue) -> Result<()> {
        self.config.write().param_set(key, value)?;
        self.certification.set_proto_max(self.config.read().proto_max);
        Ok(())
    }

    pub fn param_get(&self, key: &str) -> Result<syncrepl_core::ParamValue> {
        self.config.read().param_get(key)
    }
}
