// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use syncrepl_core::{Error, Result, TrxWriteSet};

/// An item delivered by an [`IstEventQueue`].
#[derive(Debug, Clone)]
pub enum IstEvent {
    WriteSet { seqno: i64, ws: TrxWriteSet },
    Eof,
}

enum Msg {
    Event(IstEvent),
    Error(String),
}

/// A bounded, multi-consumer blocking queue consumed by applier
/// threads during an incremental state transfer. On receiver EOF it
/// broadcasts an `Eof` event to every consumer in turn; on error the
/// first popper observes it and the rest see the queue disconnect.
///
/// The underlying channel is MPMC, so a single `Eof` message would
/// only ever reach one consumer; `push_eof` instead sends one per
/// live consumer handle, tracked by `consumers`.
pub struct IstEventQueue {
    tx: crossbeam_channel::Sender<Msg>,
    rx: crossbeam_channel::Receiver<Msg>,
    consumers: Arc<AtomicUsize>,
}

impl IstEventQueue {
    pub fn bounded(capacity: usize) -> Self {
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        Self { tx, rx, consumers: Arc::new(AtomicUsize::new(1)) }
    }

    pub fn push_write_set(&self, seqno: i64, ws: TrxWriteSet) -> Result<()> {
        self.tx
            .send(Msg::Event(IstEvent::WriteSet { seqno, ws }))
            .map_err(|_| Error::ConnFail("IST event queue closed".into()))
    }

    /// Sends one `Eof` event per registered consumer, so every
    /// applier thread still popping this queue observes it rather
    /// than exactly one of them (§4.4).
    pub fn push_eof(&self) {
        for _ in 0..self.consumers.load(Ordering::Acquire) {
            let _ = self.tx.send(Msg::Event(IstEvent::Eof));
        }
    }

    pub fn push_error(&self, reason: String) {
        let _ = self.tx.send(Msg::Error(reason));
    }

    /// Blocks for the next event. Returns `Err` exactly once per
    /// `push_error` call, to whichever thread pops it first.
    pub fn pop(&self) -> Result<IstEvent> {
        match self.rx.recv() {
            Ok(Msg::Event(e)) => Ok(e),
            Ok(Msg::Error(reason)) => Err(Error::ConnFail(reason)),
            Err(_) => Err(Error::ConnFail("IST event queue closed".into())),
        }
    }

    /// A cloneable consumer handle; all clones share the same queue
    /// and count toward `push_eof`'s broadcast.
    pub fn consumer(&self) -> IstEventQueue {
        self.consumers.fetch_add(1, Ordering::AcqRel);
        IstEventQueue { tx: self.tx.clone(), rx: self.rx.clone(), consumers: Arc::clone(&self.consumers) }
    }
}
