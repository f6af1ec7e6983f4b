//! `ff-dispatch` — deciding which robot puts out which fire.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`strategy`] | `Strategy` trait — the extension point for dispatch policies |
//! | [`greedy`]   | `GreedyDispatch` — fire-by-fire cheapest-robot assignment     |
//! | [`state`]    | `DispatchState`, `Assignment`, `DispatchPlan`                |
//! | [`water`]    | `nearest_water` — closest place a robot can draw water       |
//! | [`order`]    | `visit_order` — nearest-neighbour chain over fire positions  |
//!
//! # Planning vs. playback
//!
//! A strategy runs once, before playback, against a read-only view of the
//! world.  It tracks where each robot *will* be in a private
//! [`DispatchState`] per robot and returns every event it wants executed in
//! a [`DispatchPlan`].  Nothing in the world changes until the clock plays
//! those events back.

pub mod greedy;
pub mod order;
pub mod state;
pub mod strategy;
pub mod water;


pub use greedy::GreedyDispatch;
pub use order::visit_order;
pub use state::{Assignment, DispatchPlan, DispatchState};
pub use strategy::Strategy;
pub use water::{WaterAccess, nearest_water};
