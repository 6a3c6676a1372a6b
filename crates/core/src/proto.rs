// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! The protocol-version map (§6): a node-level `proto_max` selects a
//! row fixing the write-set, state-transfer-request and record-set
//! sub-versions it allows.

/// The sub-versions a negotiated `proto_max` implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtoVersion {
    pub ws_ver: u8,
    pub str_proto: u8,
    pub rs_ver: u8,
}

/// Looks up the row for `proto_max`, or `None` outside the supported
/// `1..=8` range.
pub fn proto_version(proto_max: u8) -> Option<ProtoVersion> {
    Some(match proto_max {
        1 => ProtoVersion { ws_ver: 1, str_proto: 0, rs_ver: 1 },
        2 => ProtoVersion { ws_ver: 1, str_proto: 1, rs_ver: 1 },
        3 | 4 => ProtoVersion { ws_ver: 2, str_proto: 1, rs_ver: 1 },
        5 => ProtoVersion { ws_ver: 3, str_proto: 1, rs_ver: 1 },
        6 | 7 => ProtoVersion { ws_ver: 3, str_proto: 2, rs_ver: 1 },
        8 => ProtoVersion { ws_ver: 3, str_proto: 2, rs_ver: 2 },
        _ => return None,
    })
}
