// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use parking_lot::Mutex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use syncrepl_core::Gtid;
use tracing::debug;
use uuid::Uuid;

/// Durable on-disk marker of the last safely committed GTID, a
/// `safe_to_bootstrap` flag, and a SAFE/UNSAFE marker (§6, §9's
/// "SavedState as an explicit owned collaborator").
///
/// Written atomically via temp-file-then-rename on every transition,
/// so a crash mid-write never leaves a torn file behind.
pub struct SavedState {
    path: PathBuf,
    inner: Mutex<Fields>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fields {
    gtid: Gtid,
    safe_to_bootstrap: bool,
    safe: bool,
}

impl SavedState {
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let fields = match fs::read_to_string(&path) {
            Ok(contents) => parse(&contents).unwrap_or_else(default_fields),
            Err(e) if e.kind() == io::ErrorKind::NotFound => default_fields(),
            Err(e) => return Err(e),
        };
        let state = Self { path, inner: Mutex::new(fields) };
        state.flush()?;
        Ok(state)
    }

    pub fn gtid(&self) -> Gtid {
        self.inner.lock().gtid
    }

    pub fn safe_to_bootstrap(&self) -> bool {
        self.inner.lock().safe_to_bootstrap
    }

    pub fn is_safe(&self) -> bool {
        self.inner.lock().safe
    }

    /// Marks the state UNSAFE (used while a TOI action or a pause is
    /// in flight) and flushes immediately.
    pub fn mark_unsafe(&self) -> io::Result<()> {
        self.inner.lock().safe = false;
        self.flush()
    }

    /// Persists `gtid` as the new safely-committed position, marks
    /// the state SAFE and bootstrap-eligible, and flushes.
    pub fn commit(&self, gtid: Gtid) -> io::Result<()> {
        {
            let mut fields = self.inner.lock();
            fields.gtid = gtid;
            fields.safe = true;
            fields.safe_to_bootstrap = true;
        }
        self.flush()
    }

    fn flush(&self) -> io::Result<()> {
        let fields = *self.inner.lock();
        let contents = format!(
            "group={}\nseqno={}\nsafe_to_bootstrap={}\nsafe={}\n",
            fields.gtid.group, fields.gtid.seqno, fields.safe_to_bootstrap, fields.safe
        );
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), ?fields, "saved state flushed");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

fn default_fields() -> Fields {
    // A node that has never recorded any state has nothing to lose by
    // bootstrapping; only an unclean shutdown after real progress
    // clears this flag (see `mark_unsafe`).
    Fields { gtid: Gtid::undefined(Uuid::nil()), safe_to_bootstrap: true, safe: true }
}

fn parse(contents: &str) -> Option<Fields> {
    let mut group = None;
    let mut seqno = None;
    let mut safe_to_bootstrap = None;
    let mut safe = None;
    for line in contents.lines() {
        let (key, value) = line.split_once('=')?;
        match key {
            "group" => group = value.parse::<Uuid>().ok(),
            "seqno" => seqno = value.parse::<i64>().ok(),
            "safe_to_bootstrap" => safe_to_bootstrap = value.parse::<bool>().ok(),
            "safe" => safe = value.parse::<bool>().ok(),
            _ => {}
        }
    }
    Some(Fields {
        gtid: Gtid::new(group?, seqno?),
        safe_to_bootstrap: safe_to_bootstrap?,
        safe: safe?,
    })
}
