use thiserror::Error;

use ff_agent::{AgentError, RobotKind};
use ff_core::{CellPos, Terrain};
use ff_map::MapError;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("map error: {0}")]
    Map(#[from] MapError),

    #[error("robot error: {0}")]
    Agent(#[from] AgentError),

    #[error("{what} at {pos} is outside the map")]
    OutOfBounds { pos: CellPos, what: &'static str },

    #[error("{kind} robot cannot start on {terrain} at {pos}")]
    UntraversableStart { kind: RobotKind, pos: CellPos, terrain: Terrain },

    #[error("event queue still had pending events after {0} batches")]
    BatchLimit(u64),

    #[error("cannot dispatch while {0} events are still pending")]
    DispatchPending(usize),
}

pub type SimResult<T> = Result<T, SimError>;
