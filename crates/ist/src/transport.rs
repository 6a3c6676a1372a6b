// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use syncrepl_core::{Error, Result, TrxWriteSet};

/// A single frame of the IST wire protocol (§4.4). Real deployments
/// carry these over TCP/TLS; that framing is an external
/// collaborator's concern (§1).
#[derive(Debug, Clone)]
pub enum IstFrame {
    Hello { version: u8, first: i64, last: i64 },
    HelloAck { version: u8 },
    WriteSet { seqno: i64, ws: TrxWriteSet },
    Eof,
    Error(String),
}

/// The transport an [`crate::IstSender`]/[`crate::IstReceiver`] pair
/// speaks over. Supplied by the embedder.
pub trait Transport: Send {
    fn send(&self, frame: IstFrame) -> Result<()>;
    fn recv(&self) -> Result<IstFrame>;
}

/// An in-process `Transport` backed by a pair of channels, used by
/// tests and by single-process multi-node harnesses.
pub struct ChannelTransport {
    tx: crossbeam_channel::Sender<IstFrame>,
    rx: crossbeam_channel::Receiver<IstFrame>,
}

impl ChannelTransport {
    /// Builds a connected pair: frames sent on one end are received
    /// on the other.
    pub fn pair() -> (ChannelTransport, ChannelTransport) {
        let (tx_a, rx_a) = crossbeam_channel::unbounded();
        let (tx_b, rx_b) = crossbeam_channel::unbounded();
        (ChannelTransport { tx: tx_a, rx: rx_b }, ChannelTransport { tx: tx_b, rx: rx_a })
    }
}

impl Transport for ChannelTransport {
    fn send(&self, frame: IstFrame) -> Result<()> {
        self.tx.send(frame).map_err(|_| Error::ConnFail("IST peer gone".into()))
    }

    fn recv(&self) -> Result<IstFrame> {
        self.rx.recv().map_err(|_| Error::ConnFail("IST peer gone".into()))
    }
}
