// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the replication engine's public operations.
///
/// Variants correspond to the outcomes a caller must branch on, not to
/// implementation detail: a `BfAbort` always means "call `replay_trx`",
/// a `Fatal` always means the node has marked itself corrupt and is
/// closing.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("group communication unavailable: {0}")]
    ConnFail(String),

    #[error("node cannot proceed: {0}")]
    NodeFail(String),

    #[error("transaction certification failed")]
    TrxFail,

    #[error("transaction seqno below initial position")]
    TrxMissing,

    #[error("transaction was brute-force aborted, replay required")]
    BfAbort,

    #[error("transaction aborted after replicate, before pre-commit")]
    PrecommitAbort,

    #[error("write-set exceeds configured maximum of {max} bytes (was {actual})")]
    SizeExceeded { max: usize, actual: usize },

    #[error("unrecoverable failure: {0}")]
    Fatal(String),

    #[error("invalid parameter {key}: {reason}")]
    InvalidParam { key: String, reason: String },

    #[error("entry admission interrupted")]
    Interrupted,

    #[error("wait timed out")]
    TimedOut,

    #[error("no entry for group {0}")]
    NotFound(String),
}
