// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::gcs::Gcs;
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{debug, trace};

/// Best-effort deferred work the service thread consumes (§4.5):
/// reporting the last-committed seqno to GCS for flow control, and
/// releasing a seqno's gcache entry once it is safe to drop.
pub enum ServiceTask {
    ReportLastCommitted(i64),
    ReleaseGcacheSeqno(i64),
}

/// A single background worker draining [`ServiceTask`]s. Consecutive
/// `ReportLastCommitted` requests coalesce to the highest seqno seen,
/// since only the latest report matters to flow control.
pub struct ServiceThread {
    tx: crossbeam_channel::Sender<ServiceTask>,
    handle: Option<JoinHandle<()>>,
}

impl ServiceThread {
    pub fn spawn(gcs: Arc<dyn Gcs>, release_gcache: impl Fn(i64) + Send + 'static) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded::<ServiceTask>();
        let handle = std::thread::spawn(move || {
            let mut pending_last_committed: Option<i64> = None;
            // Drain whatever is queued so far, coalescing last-committed
            // reports, before blocking again.
            while let Ok(task) = rx.recv() {
                match task {
                    ServiceTask::ReportLastCommitted(seqno) => {
                        pending_last_committed =
                            Some(pending_last_committed.map_or(seqno, |p| p.max(seqno)));
                    }
                    ServiceTask::ReleaseGcacheSeqno(seqno) => {
                        trace!(seqno, "service thread releasing gcache seqno");
                        release_gcache(seqno);
                    }
                }
                while let Ok(task) = rx.try_recv() {
                    match task {
                        ServiceTask::ReportLastCommitted(seqno) => {
                            pending_last_committed =
                                Some(pending_last_committed.map_or(seqno, |p| p.max(seqno)));
                        }
                        ServiceTask::ReleaseGcacheSeqno(seqno) => {
                            trace!(seqno, "service thread releasing gcache seqno");
                            release_gcache(seqno);
                        }
                    }
                }
                if let Some(seqno) = pending_last_committed.take() {
                    debug!(seqno, "service thread reporting last committed");
                    gcs.set_last_applied(seqno);
                }
            }
        });
        Self { tx, handle: Some(handle) }
    }

    pub fn submit(&self, task: ServiceTask) {
        let _ = self.tx.send(task);
    }
}

impl Drop for ServiceThread {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            drop(std::mem::replace(&mut self.tx, crossbeam_channel::unbounded().0));
            let _ = handle.join();
        }
    }
}
