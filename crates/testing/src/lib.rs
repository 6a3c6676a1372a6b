// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

mod cluster;
mod gcache;
mod gcs;
mod observer;

pub use cluster::FakeCluster;
pub use gcache::{FakeGCache, RecordingGCache};
pub use gcs::{FakeActionSource, FakeGcs};
pub use observer::RecordingObserver;
