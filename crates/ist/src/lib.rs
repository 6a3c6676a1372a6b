// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Incremental state transfer (§4.4): a point-to-point sender and
//! receiver that stream a contiguous `global_seqno` range from one
//! node's gcache to a joining peer, plus the bounded event queue the
//! joining node's appliers consume while the gap is being filled.
//!
//! The concrete socket/TLS transport is an external collaborator
//! (§1); this crate defines the framing, version negotiation and
//! backpressure against a [`Transport`] trait so the algorithm is
//! fully testable in-process.

mod gcache;
mod queue;
mod receiver;
mod sender;
mod transport;

pub use gcache::GCache;
pub use queue::{IstEvent, IstEventQueue};
pub use receiver::IstReceiver;
pub use sender::{AsyncSenderMap, IstSender};
pub use transport::{ChannelTransport, IstFrame, Transport};

/// Whether a node's gcache can serve an IST for the range
/// `[first, last]`. Per §9b: IST fails iff the gcache's oldest
/// retained seqno is newer than `first`.
pub fn can_serve(gcache: &dyn GCache, first: i64) -> bool {
    gcache.first_seqno() <= first
}
