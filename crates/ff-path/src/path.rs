//! Planned paths.

use ff_core::{CellPos, Direction};

/// One cell on a [`Path`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep {
    pub pos: CellPos,
    /// Direction taken to reach `pos`; `None` for the start cell.
    pub direction: Option<Direction>,
    /// Seconds spent on the edge into `pos`; `0.0` for the start cell.
    pub secs: f64,
}

/// The result of a planning query: the cells from start to goal (both
/// included) and the total travel time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub steps: Vec<PathStep>,
    pub total_secs: f64,
}

impl Path {
    /// A zero-length path that stays on `pos`.
    pub fn trivial(pos: CellPos) -> Self {
        Self {
            steps:      vec![PathStep { pos, direction: None, secs: 0.0 }],
            total_secs: 0.0,
        }
    }

    /// `(direction, secs)` for every move, start excluded.
    pub fn moves(&self) -> impl Iterator<Item = (Direction, f64)> + '_ {
        self.steps.iter().filter_map(|s| s.direction.map(|d| (d, s.secs)))
    }

    /// Number of moves (cells entered).
    #[inline]
    pub fn step_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// `true` if start and goal are the same cell.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.step_count() == 0
    }
}
