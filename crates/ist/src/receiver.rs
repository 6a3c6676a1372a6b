// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::queue::IstEventQueue;
use crate::transport::{IstFrame, Transport};
use syncrepl_core::{Error, Result};
use tracing::info;

/// Receives a sender's handshake and write-set stream, pushing each
/// event into an [`IstEventQueue`] for the applier threads (§4.4).
pub struct IstReceiver<T: Transport> {
    transport: T,
}

impl<T: Transport> IstReceiver<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Picks the smaller of the sender's advertised version and this
    /// node's `proto_max` (§6 version negotiation), then drains the
    /// stream into `queue` until `Eof` or an error frame.
    pub fn run(&self, queue: &IstEventQueue, proto_max: u8) -> Result<()> {
        let (sender_version, first, last) = match self.transport.recv()? {
            IstFrame::Hello { version, first, last } => (version, first, last),
            _ => return Err(Error::Fatal("expected IST hello frame".into())),
        };
        let negotiated = sender_version.min(proto_max);
        self.transport.send(IstFrame::HelloAck { version: negotiated })?;
        info!(first, last, negotiated, "IST receive starting");

        loop {
            match self.transport.recv()? {
                IstFrame::WriteSet { seqno, ws } => queue.push_write_set(seqno, ws)?,
                IstFrame::Eof => {
                    queue.push_eof();
                    return Ok(());
                }
                IstFrame::Error(reason) => {
                    queue.push_error(reason.clone());
                    return Err(Error::ConnFail(reason));
                }
                IstFrame::Hello { .. } | IstFrame::HelloAck { .. } => {
                    return Err(Error::Fatal("unexpected IST handshake frame mid-stream".into()));
                }
            }
        }
    }
}
