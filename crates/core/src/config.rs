// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Commit monitor ordering mode (§6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitOrderMode {
    Bypass,
    Ooooc,
    LocalOoooc,
    NoOoooc,
}

impl Display for CommitOrderMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CommitOrderMode::Bypass => "bypass",
            CommitOrderMode::Ooooc => "ooooc",
            CommitOrderMode::LocalOoooc => "local_ooooc",
            CommitOrderMode::NoOoooc => "no_ooooc",
        };
        f.write_str(s)
    }
}

/// The engine's runtime configuration (§6). Every field here is also
/// reachable through the string-keyed [`Config::param_set`] /
/// [`Config::param_get`] schema used by the provider API's parameter
/// reflection surface (§9).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub proto_max: u8,
    pub commit_order: CommitOrderMode,
    pub key_format: u8,
    pub max_write_set_size: usize,
    pub causal_read_timeout: Duration,
    pub base_dir: String,
    pub base_host: String,
    pub base_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proto_max: 8,
            commit_order: CommitOrderMode::NoOoooc,
            key_format: 2,
            max_write_set_size: 2 * 1024 * 1024 * 1024,
            causal_read_timeout: Duration::from_secs(30),
            base_dir: ".".to_string(),
            base_host: "0.0.0.0".to_string(),
            base_port: 4567,
        }
    }
}

/// A value accepted by [`Config::param_set`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i64),
    UInt(u64),
    Str(String),
}

pub type ParamError = Error;

impl Config {
    /// Dispatches a string-keyed parameter write, validating range
    /// before mutation. Unknown keys and out-of-range values fail
    /// with [`Error::InvalidParam`].
    pub fn param_set(&mut self, key: &str, value: ParamValue) -> Result<(), ParamError> {
        match key {
            "protocol.proto_max" => {
                let v = expect_uint(key, &value)?;
                if v == 0 || v > 8 {
                    return Err(invalid(key, "must be in 1..=8"));
                }
                self.proto_max = v as u8;
            }
            "replicator.commit_order" => {
                let v = expect_uint(key, &value)?;
                self.commit_order = match v {
                    0 => CommitOrderMode::Bypass,
                    1 => CommitOrderMode::Ooooc,
                    2 => CommitOrderMode::LocalOoooc,
                    3 => CommitOrderMode::NoOoooc,
                    _ => return Err(invalid(key, "must be in 0..=3")),
                };
            }
            "replicator.key_format" => {
                let v = expect_uint(key, &value)?;
                self.key_format = v as u8;
            }
            "replicator.max_write_set_size" => {
                let v = expect_uint(key, &value)?;
                self.max_write_set_size = v as usize;
            }
            "replicator.causal_read_timeout" => {
                let v = expect_uint(key, &value)?;
                self.causal_read_timeout = Duration::from_millis(v);
            }
            "base.dir" => self.base_dir = expect_str(key, &value)?,
            "base.host" => self.base_host = expect_str(key, &value)?,
            "base.port" => {
                let v = expect_uint(key, &value)?;
                if v == 0 || v > u16::MAX as u64 {
                    return Err(invalid(key, "must be a valid port"));
                }
                self.base_port = v as u16;
            }
            _ => return Err(Error::InvalidParam { key: key.to_string(), reason: "unknown parameter".into() }),
        }
        Ok(())
    }

    pub fn param_get(&self, key: &str) -> Result<ParamValue, ParamError> {
        Ok(match key {
            "protocol.proto_max" => ParamValue::UInt(self.proto_max as u64),
            "replicator.commit_order" => ParamValue::Str(self.commit_order.to_string()),
            "replicator.key_format" => ParamValue::UInt(self.key_format as u64),
            "replicator.max_write_set_size" => ParamValue::UInt(self.max_write_set_size as u64),
            "replicator.causal_read_timeout" => {
                ParamValue::UInt(self.causal_read_timeout.as_millis() as u64)
            }
            "base.dir" => ParamValue::Str(self.base_dir.clone()),
            "base.host" => ParamValue::Str(self.base_host.clone()),
            "base.port" => ParamValue::UInt(self.base_port as u64),
            _ => return Err(Error::InvalidParam { key: key.to_string(), reason: "unknown parameter".into() }),
        })
    }
}

fn expect_uint(key: &str, value: &ParamValue) -> Result<u64, ParamError> {
    match value {
        ParamValue::UInt(v) => Ok(*v),
        ParamValue::Int(v) if *v >= 0 => Ok(*v as u64),
        _ => Err(invalid(key, "expected a non-negative integer")),
    }
}

fn expect_str(key: &str, value: &ParamValue) -> Result<String, ParamError> {
    match value {
        ParamValue::Str(v) => Ok(v.clone()),
        _ => Err(invalid(key, "expected a string")),
    }
}

fn invalid(key: &str, reason: &str) -> Error {
    Error::InvalidParam { key: key.to_string(), reason: reason.to_string() }
}
