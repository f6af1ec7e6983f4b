//! Map-subsystem error type.

use thiserror::Error;

use ff_core::{CellPos, Direction};

/// Errors produced by `ff-map`.
#[derive(Debug, Error, PartialEq)]
pub enum MapError {
    #[error("map must have at least one row and one column (got {rows}x{cols})")]
    EmptyMap { rows: u32, cols: u32 },

    #[error("cell size must be a positive finite length in metres (got {0})")]
    InvalidCellSize(f64),

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRows { row: usize, got: usize, expected: usize },

    #[error("cell {0} is outside the map")]
    OutOfBounds(CellPos),

    #[error("cell {pos} has no neighbour to the {direction}")]
    InvalidDirection { pos: CellPos, direction: Direction },

    #[error("unknown terrain glyph {glyph:?} at {pos}")]
    UnknownTerrainChar { glyph: char, pos: CellPos },
}

pub type MapResult<T> = Result<T, MapError>;
