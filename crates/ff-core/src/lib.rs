//! `ff-core` — foundational types for the firefighting robot simulator.
//!
//! This crate is a dependency of every other `ff-*` crate.  It has no `ff-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RobotId`, `FireId`                                   |
//! | [`cell`]        | `CellPos`, `Direction`                                |
//! | [`terrain`]     | `Terrain` enum                                        |
//! | [`time`]        | `SimTime`, `SimConfig`                                |
//! | [`rng`]         | `SimRng` (seeded, for synthetic scenarios)            |
//! | [`error`]       | `FfError`                                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod cell;
pub mod error;
pub mod ids;
pub mod rng;
pub mod terrain;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{CellPos, Direction};
pub use error::FfError;
pub use ids::{FireId, RobotId};
pub use rng::SimRng;
pub use terrain::Terrain;
pub use time::{SimConfig, SimTime, whole_secs};
