// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! A generic ordered-entry admission gate.
//!
//! `Monitor<O>` admits callers in strictly increasing `seqno` order,
//! subject to a per-order readiness predicate `O::ready`. This is the
//! primitive the replicator's local, apply and commit order gates
//! (§4.1) are all instances of.

mod order;

pub use order::{ApplyOrder, CommitOrder, CommitOrderDecision, LocalOrder};

use parking_lot::{Condvar, Mutex};
use std::collections::HashSet;
use syncrepl_core::{Error, Gtid, Result};
use uuid::Uuid;

/// An admission ticket. `seqno` is this order's position in the
/// monitor's total order; `ready` decides, given the current
/// watermarks, whether it may be admitted.
pub trait Order {
    fn seqno(&self) -> i64;

    /// `last_entered` is the highest seqno ever admitted (whether or
    /// not it has left yet); `last_left` is the highest seqno fully
    /// released in contiguous order.
    fn ready(&self, last_entered: i64, last_left: i64) -> bool;
}

struct State {
    group: Uuid,
    last_entered: i64,
    last_left: i64,
    /// Seqnos that left or were cancelled ahead of `last_left`,
    /// waiting for the gap in front of them to close.
    released: HashSet<i64>,
    interrupted: HashSet<i64>,
    closed: bool,
}

impl State {
    fn advance_last_left(&mut self, released: i64) {
        if released <= self.last_left {
            return;
        }
        self.released.insert(released);
        while self.released.remove(&(self.last_left + 1)) {
            self.last_left += 1;
        }
    }
}

/// The ordered-entry gate itself.
pub struct Monitor<O> {
    state: Mutex<State>,
    cond: Condvar,
    _marker: std::marker::PhantomData<O>,
}

impl<O: Order> Default for Monitor<O> {
    fn default() -> Self {
        Self::new(Uuid::nil(), -1)
    }
}

impl<O: Order> Monitor<O> {
    pub fn new(group: Uuid, initial_seqno: i64) -> Self {
        Self {
            state: Mutex::new(State {
                group,
                last_entered: initial_seqno,
                last_left: initial_seqno,
                released: HashSet::new(),
                interrupted: HashSet::new(),
                closed: false,
            }),
            cond: Condvar::new(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Resets watermarks for a (possibly new) group. Continuity with
    /// a prior position is preserved only when `group` matches the
    /// monitor's current group.
    pub fn set_initial_position(&self, group: Uuid, seqno: i64) {
        let mut st = self.state.lock();
        st.group = group;
        st.last_entered = seqno;
        st.last_left = seqno;
        st.released.clear();
        st.interrupted.clear();
    }

    /// Blocks until every lower seqno has left or been cancelled and
    /// `o.ready()` holds, then admits `o`. Fails `Interrupted` if
    /// [`Monitor::interrupt`] is called for this seqno while blocked.
    pub fn enter(&self, o: &O) -> Result<()> {
        let seqno = o.seqno();
        let mut st = self.state.lock();
        loop {
            if st.interrupted.remove(&seqno) {
                return Err(Error::Interrupted);
            }
            if st.closed {
                return Err(Error::ConnFail("monitor closed".into()));
            }
            if o.ready(st.last_entered, st.last_left) {
                break;
            }
            self.cond.wait(&mut st);
        }
        st.last_entered = st.last_entered.max(seqno);
        Ok(())
    }

    /// True once `seqno` has been admitted and not yet left.
    pub fn entered(&self, seqno: i64) -> bool {
        let st = self.state.lock();
        seqno <= st.last_entered && seqno > st.last_left && !st.released.contains(&seqno)
    }

    /// Releases `o`'s slot, advancing `last_left` over any
    /// contiguous run of seqnos that have already left or been
    /// cancelled.
    pub fn leave(&self, o: &O) {
        let mut st = self.state.lock();
        st.advance_last_left(o.seqno());
        self.cond.notify_all();
    }

    /// Marks `seqno` as completed without ever being admitted;
    /// contributes to `last_left` advancement exactly like `leave`.
    pub fn self_cancel(&self, seqno: i64) {
        let mut st = self.state.lock();
        st.last_entered = st.last_entered.max(seqno);
        st.advance_last_left(seqno);
        self.cond.notify_all();
    }

    /// Blocks until `last_left >= upto`.
    pub fn drain(&self, upto: i64) {
        let mut st = self.state.lock();
        while st.last_left < upto && !st.closed {
            self.cond.wait(&mut st);
        }
    }

    /// Blocks until `last_left >= gtid.seqno` for the monitor's
    /// current group. Fails `NotFound` on group mismatch.
    pub fn wait(&self, gtid: &Gtid) -> Result<()> {
        let mut st = self.state.lock();
        if st.group != gtid.group {
            return Err(Error::NotFound(gtid.group.to_string()));
        }
        while st.last_left < gtid.seqno && !st.closed {
            self.cond.wait(&mut st);
        }
        Ok(())
    }

    /// Unblocks a thread waiting in `enter` for this seqno.
    pub fn interrupt(&self, seqno: i64) {
        let mut st = self.state.lock();
        st.interrupted.insert(seqno);
        self.cond.notify_all();
    }

    pub fn last_left(&self) -> i64 {
        self.state.lock().last_left
    }

    pub fn last_entered(&self) -> i64 {
        self.state.lock().last_entered
    }

    pub fn close(&self) {
        let mut st = self.state.lock();
        st.closed = true;
        self.cond.notify_all();
    }
}
