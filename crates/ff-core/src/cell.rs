//! Grid coordinates and the four cardinal directions.
//!
//! Cells are identified by `(row, col)` index pairs.  Bounds are owned by the
//! map; `CellPos` itself only refuses to step below row/column zero.

use std::fmt;

/// A `(row, col)` grid coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPos {
    pub row: u32,
    pub col: u32,
}

impl CellPos {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Squared Euclidean distance in cell units.
    ///
    /// Used to chain fires by proximity; the square root is never needed
    /// because only the ordering matters.
    #[inline]
    pub fn distance_sq(self, other: CellPos) -> u64 {
        let dr = self.row.abs_diff(other.row) as u64;
        let dc = self.col.abs_diff(other.col) as u64;
        dr * dr + dc * dc
    }

    /// The coordinate one step in `dir`, or `None` if it would leave the
    /// non-negative quadrant.  Upper bounds are checked by the map.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<CellPos> {
        let (dr, dc) = dir.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(CellPos { row, col })
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for CellPos {
    #[inline]
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four grid neighbours.  Rows grow southwards.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in the fixed expansion order used by every search.
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::South, Direction::East, Direction::West];

    /// `(row delta, col delta)` for one step in this direction.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East  => (0, 1),
            Direction::West  => (0, -1),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East  => Direction::West,
            Direction::West  => Direction::East,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East  => "east",
            Direction::West  => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
