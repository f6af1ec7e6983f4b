//! Agent-subsystem error type.

use thiserror::Error;

use crate::RobotKind;

#[derive(Debug, Error, PartialEq)]
pub enum AgentError {
    #[error("{kind} robots cannot run at {speed} km/h (allowed 0..={max})")]
    InvalidSpeed { kind: RobotKind, speed: f64, max: f64 },

    #[error("refill volume must be non-negative (got {0} L)")]
    NegativeVolume(i64),
}

pub type AgentResult<T> = Result<T, AgentError>;
