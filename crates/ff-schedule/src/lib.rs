//! `ff-schedule` — robot events and the queue that orders them.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`event`]  | `Event`, `EventKind`, `EventSeq`                           |
//! | [`queue`]  | `EventQueue` (`BTreeMap<(SimTime, EventSeq), Event>`)      |
//!
//! # Ordering model
//!
//! Every event carries its due time and an insertion sequence number handed
//! out by the queue.  Events are executed in ascending `(time, seq)` order,
//! so two events due at the same second run in the order they were
//! scheduled.

pub mod event;
pub mod queue;


pub use event::{Event, EventKind, EventSeq};
pub use queue::EventQueue;
