//! `EventQueue` — stable time-ordered queue of pending events.
//!
//! `BTreeMap` gives O(log E) insert and pop over the E pending events and
//! iterates in key order for free, which is what the read-only views and
//! the restart snapshot need.

use std::collections::BTreeMap;

use ff_core::SimTime;

use crate::{Event, EventKind, EventSeq};

/// Pending events keyed by `(due time, insertion sequence)`.
///
/// Cloning the queue is the snapshot mechanism used by restart.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    inner:    BTreeMap<(SimTime, EventSeq), Event>,
    /// Next sequence number to hand out.  Never reused.
    next_seq: EventSeq,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and enqueue an event due at `time`.  Returns its sequence
    /// number.
    pub fn schedule(&mut self, time: SimTime, kind: EventKind) -> EventSeq {
        let seq = self.next_seq;
        self.next_seq += 1;
        let event = Event::new(time, seq, kind);
        self.inner.insert(event.key(), event);
        seq
    }

    /// Remove and return the earliest event if it is due at or before `now`.
    pub fn pop_due(&mut self, now: SimTime) -> Option<Event> {
        let entry = self.inner.first_entry()?;
        if entry.key().0 > now {
            return None;
        }
        Some(entry.remove())
    }

    /// Due time of the earliest pending event.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.inner.keys().next().map(|(t, _)| *t)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Pending events in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ {
        self.inner.values()
    }

    /// A copy of the pending set, for restart.
    pub fn snapshot(&self) -> EventQueue {
        self.clone()
    }
}
