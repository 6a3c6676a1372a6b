// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Global transaction identifier: a group UUID plus a monotonic
/// sequence number. `seqno == -1` represents UNDEFINED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gtid {
    pub group: Uuid,
    pub seqno: i64,
}

impl Gtid {
    pub const UNDEFINED_SEQNO: i64 = -1;

    pub fn new(group: Uuid, seqno: i64) -> Self {
        Self { group, seqno }
    }

    pub fn undefined(group: Uuid) -> Self {
        Self { group, seqno: Self::UNDEFINED_SEQNO }
    }

    pub fn is_undefined(&self) -> bool {
        self.seqno == Self::UNDEFINED_SEQNO
    }

    pub fn same_group(&self, other: &Gtid) -> bool {
        self.group == other.group
    }
}

impl Display for Gtid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group, self.seqno)
    }
}
