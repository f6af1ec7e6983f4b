//! `ff-sim` — the discrete-event clock and the world it drives.
//!
//! # Batch loop
//!
//! ```text
//! dispatch(strategy, planner)   — plan from an empty queue, enqueue every event
//! loop:
//!   ① Execute  — pop every event due at or before the clock, in
//!                (time, seq) order, and apply it to the world:
//!                  Move{robot, dir}       → robot enters the neighbour cell
//!                  Refill{robot, volume}  → robot tops up its reservoir
//!                  Intervene{robot, fire} → robot pours min(tank, intensity)
//!   ② Advance  — jump the clock to the next pending due time
//! until the queue is empty
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`sim`]      | `Sim` — clock, world state, event execution, restart    |
//! | [`builder`]  | `SimBuilder` — validated construction                   |
//! | [`view`]     | `WorldSnapshot`, `RobotView`, `FireView`                |
//! | [`observer`] | `SimObserver` trait, `NoopObserver`                     |
//! | [`error`]    | `SimError`, `SimResult<T>`                              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ff_agent::RobotKind;
//! use ff_dispatch::GreedyDispatch;
//! use ff_path::DijkstraPlanner;
//! use ff_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::from_rows(&["...", "...", "W.."], 100.0)?
//!     .robot(RobotKind::Wheeled, (0, 0).into())
//!     .fire((0, 2).into(), 100)
//!     .build()?;
//! sim.dispatch(&GreedyDispatch, &DijkstraPlanner)?;
//! sim.run_to_completion()?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod view;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use view::{FireView, RobotView, WorldSnapshot};
