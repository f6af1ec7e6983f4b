//! Framework error type.
//!
//! Sub-crates define their own error enums (`MapError`, `AgentError`, …) and
//! wrap them where they cross a crate boundary.  `FfError` covers the
//! name lookups for the core enums.

use thiserror::Error;

/// Failure to parse a core enum from its name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FfError {
    #[error("unknown terrain kind {0:?}")]
    UnknownTerrain(String),

    #[error("unknown robot kind {0:?}")]
    UnknownRobotKind(String),
}
