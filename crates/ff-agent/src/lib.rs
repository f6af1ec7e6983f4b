//! `ff-agent` — robots, their capability rules, and fires.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`kind`]   | `RobotKind` and its rule table (capacity, speeds, rates)    |
//! | [`robot`]  | `Robot` — position, speed and reservoir of one robot        |
//! | [`fire`]   | `Fire` — position and remaining intensity                   |
//! | [`error`]  | `AgentError`, `AgentResult<T>`                              |
//!
//! # Ownership
//!
//! The simulation owns every `Robot` and `Fire` in a plain `Vec` indexed by
//! `RobotId` / `FireId`.  The planner and dispatcher only ever borrow them;
//! all mutation happens when the clock executes an event.

pub mod error;
pub mod fire;
pub mod kind;
pub mod robot;


pub use error::{AgentError, AgentResult};
pub use fire::Fire;
pub use kind::{RobotKind, UNLIMITED_CAPACITY};
pub use robot::Robot;
