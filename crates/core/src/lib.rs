// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Shared data model, error and configuration types for the
//! synchronous multi-master write-set replication engine.

mod config;
mod error;
mod gtid;
mod proto;
mod state;
mod trx;

pub use config::{CommitOrderMode, Config, ParamError, ParamValue};
pub use error::{Error, Result};
pub use gtid::Gtid;
pub use proto::{proto_version, ProtoVersion};
pub use state::NodeState;
pub use trx::{KeyMode, TrxFlags, TrxKey, TrxState, TrxWriteSet, DEFAULT_WS_VERSION};
