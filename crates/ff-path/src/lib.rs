//! `ff-path` — shortest-time paths over the terrain grid.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`path`]    | `Path`, `PathStep` — the result of a planning query       |
//! | [`planner`] | `Planner` trait, `DijkstraPlanner`, `path_secs` helper    |
//!
//! Planning never fails with an error: an unreachable goal is `None`, and
//! callers that rank alternatives read it as infinite cost through
//! [`path_secs`].

pub mod path;
pub mod planner;


pub use path::{Path, PathStep};
pub use planner::{DijkstraPlanner, Planner, edge_secs, path_secs};
