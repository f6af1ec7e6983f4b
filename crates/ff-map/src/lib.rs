//! `ff-map` — the terrain grid.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`grid`]      | `TerrainMap` (row-major terrain array), `MapBuilder`      |
//! | [`synthetic`] | `synthetic` — seeded random map generator                 |
//! | [`error`]     | `MapError`, `MapResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `TerrainMap`.           |

pub mod error;
pub mod grid;
pub mod synthetic;


pub use error::{MapError, MapResult};
pub use grid::{MapBuilder, TerrainMap};
pub use synthetic::{SyntheticParams, synthetic};
