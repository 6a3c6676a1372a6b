// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// Flags carried on the wire alongside a write-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrxFlags(u8);

impl TrxFlags {
    pub const COMMIT: TrxFlags = TrxFlags(0b0000_0001);
    pub const ROLLBACK: TrxFlags = TrxFlags(0b0000_0010);
    pub const ISOLATION: TrxFlags = TrxFlags(0b0000_0100);
    pub const PA_UNSAFE: TrxFlags = TrxFlags(0b0000_1000);
    pub const BEGIN: TrxFlags = TrxFlags(0b0001_0000);
    pub const FRAGMENT: TrxFlags = TrxFlags(0b0010_0000);
    pub const NONE: TrxFlags = TrxFlags(0);

    pub fn contains(self, other: TrxFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn remove(&mut self, other: TrxFlags) {
        self.0 &= !other.0;
    }
}

impl BitOr for TrxFlags {
    type Output = TrxFlags;
    fn bitor(self, rhs: TrxFlags) -> TrxFlags {
        TrxFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for TrxFlags {
    fn bitor_assign(&mut self, rhs: TrxFlags) {
        self.0 |= rhs.0;
    }
}

/// Locking mode of a single key touched by a write-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyMode {
    Shared,
    Exclusive,
    Reference,
}

/// A single key in a write-set's key set, identified by a stable
/// fingerprint over the encoded key plus namespace (§4.2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrxKey {
    pub fingerprint: u64,
    pub mode: KeyMode,
}

impl TrxKey {
    pub fn new(fingerprint: u64, mode: KeyMode) -> Self {
        Self { fingerprint, mode }
    }

    pub fn conflicts_with(&self, other: &TrxKey) -> bool {
        self.fingerprint == other.fingerprint
            && (self.mode == KeyMode::Exclusive || other.mode == KeyMode::Exclusive)
    }
}

/// State of a transaction handle (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrxState {
    Executing,
    Replicating,
    Certifying,
    Applying,
    Committing,
    Committed,
    MustAbort,
    Aborting,
    RolledBack,
    MustCertAndReplay,
    MustReplayAm,
    MustReplayCm,
    MustReplay,
    Replaying,
}

impl TrxState {
    pub fn is_terminal(self) -> bool {
        matches!(self, TrxState::Committed | TrxState::RolledBack)
    }

    pub fn must_replay(self) -> bool {
        matches!(
            self,
            TrxState::MustCertAndReplay
                | TrxState::MustReplayAm
                | TrxState::MustReplayCm
                | TrxState::MustReplay
        )
    }
}

/// The serialized write-set of a transaction: its key set plus an
/// opaque payload. This is the unit disseminated by the group
/// communication service and cached for incremental state transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrxWriteSet {
    pub source_id: uuid::Uuid,
    pub trx_id: u64,
    pub conn_id: u64,
    pub last_seen_seqno: i64,
    pub flags: TrxFlags,
    /// The write-set record's own `ws_ver` (§6 protocol version map),
    /// stamped by the node that created it; certification fails a
    /// write-set whose version the current proto no longer allows.
    pub ws_version: u8,
    pub keys: Vec<TrxKey>,
    pub data: Vec<u8>,
}

/// The `ws_ver` a fresh write-set is stamped with absent an explicit
/// override, matching `Config::default().proto_max`'s row (proto 8).
pub const DEFAULT_WS_VERSION: u8 = 3;

impl TrxWriteSet {
    pub fn new(source_id: uuid::Uuid, trx_id: u64, conn_id: u64, last_seen_seqno: i64) -> Self {
        Self {
            source_id,
            trx_id,
            conn_id,
            last_seen_seqno,
            flags: TrxFlags::BEGIN | TrxFlags::COMMIT,
            ws_version: DEFAULT_WS_VERSION,
            keys: Vec::new(),
            data: Vec::new(),
        }
    }

    pub fn is_toi(&self) -> bool {
        self.flags.contains(TrxFlags::ISOLATION)
    }

    pub fn is_rollback(&self) -> bool {
        self.flags.contains(TrxFlags::ROLLBACK)
    }
}
