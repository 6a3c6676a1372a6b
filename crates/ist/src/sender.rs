// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::gcache::GCache;
use crate::transport::{IstFrame, Transport};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use syncrepl_core::{Error, Result};
use tracing::{debug, info};
use uuid::Uuid;

/// Streams write-sets `[first, last]` from a gcache to one joining
/// peer, in order (§4.4).
pub struct IstSender<T: Transport> {
    transport: T,
}

impl<T: Transport> IstSender<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Negotiates a protocol version with the peer and streams the
    /// range. `cancel` is polled between write-sets so
    /// [`AsyncSenderMap::cancel_all`] can abort an in-flight sender.
    pub fn send_range(
        &self,
        gcache: &dyn GCache,
        proto_max: u8,
        first: i64,
        last: i64,
        cancel: &AtomicBool,
    ) -> Result<()> {
        self.transport.send(IstFrame::Hello { version: proto_max, first, last })?;
        let negotiated = match self.transport.recv()? {
            IstFrame::HelloAck { version } => version,
            _ => return Err(Error::Fatal("IST peer skipped handshake".into())),
        };
        info!(first, last, negotiated, "IST send starting");

        for seqno in first..=last {
            if cancel.load(Ordering::Acquire) {
                self.transport.send(IstFrame::Error("sender cancelled".into()))?;
                return Err(Error::ConnFail("IST sender cancelled".into()));
            }
            let ws = gcache.get(seqno).ok_or_else(|| {
                Error::Fatal(format!("gcache missing seqno {seqno} within advertised range"))
            })?;
            debug!(seqno, "IST sending write-set");
            self.transport.send(IstFrame::WriteSet { seqno, ws })?;
        }
        self.transport.send(IstFrame::Eof)
    }
}

/// Tracks every outbound sender's cancellation flag so they can all
/// be interrupted when the node closes (§4.4, §5).
#[derive(Default)]
pub struct AsyncSenderMap {
    senders: Mutex<HashMap<Uuid, Arc<AtomicBool>>>,
}

impl AsyncSenderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new outbound sender for `peer` and returns its
    /// cancellation flag.
    pub fn register(&self, peer: Uuid) -> Arc<AtomicBool> {
        let flag = Arc::new(AtomicBool::new(false));
        self.senders.lock().insert(peer, flag.clone());
        flag
    }

    pub fn unregister(&self, peer: Uuid) {
        self.senders.lock().remove(&peer);
    }

    /// Cancels every currently registered sender.
    pub fn cancel_all(&self) {
        for flag in self.senders.lock().values() {
            flag.store(true, Ordering::Release);
        }
    }

    pub fn len(&self) -> usize {
        self.senders.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.lock().is_empty()
    }
}
