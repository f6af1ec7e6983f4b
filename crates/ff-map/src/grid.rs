//! Terrain grid representation and builder.
//!
//! # Data layout
//!
//! Terrain is stored in a single row-major `Vec<Terrain>`:
//!
//! ```text
//! cells[ row * cols + col ]
//! ```
//!
//! The same index is used by the planner for its distance and predecessor
//! arrays, so a search over the grid is a handful of flat `Vec` lookups.
//!
//! # Mutability
//!
//! A `TerrainMap` is frozen once built.  Terrain may be assigned any number
//! of times on the [`MapBuilder`] while a scenario is loaded; after
//! [`MapBuilder::build`] the map is shared by reference with the planner,
//! the dispatcher and the clock, none of which can change it.

use ff_core::{CellPos, Direction, Terrain};

use crate::{MapError, MapResult};

// ── TerrainMap ────────────────────────────────────────────────────────────────

/// Rectangular grid of terrain cells with a uniform cell edge length.
///
/// Do not construct directly; use [`MapBuilder`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainMap {
    rows: u32,
    cols: u32,
    /// Physical edge length of one cell, in metres.
    cell_size_m: f64,
    /// Row-major terrain, length `rows * cols`.
    cells: Vec<Terrain>,
    /// Every water cell, in row-major order.  Cached at build time.
    water: Vec<CellPos>,
}

impl TerrainMap {
    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn cell_size_m(&self) -> f64 {
        self.cell_size_m
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// `true` if `pos` lies inside `[0, rows) × [0, cols)`.
    #[inline]
    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major index of `pos`.  Callers must have checked [`contains`](Self::contains).
    #[inline]
    pub fn index_of(&self, pos: CellPos) -> usize {
        pos.row as usize * self.cols as usize + pos.col as usize
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn pos_of(&self, index: usize) -> CellPos {
        let cols = self.cols as usize;
        CellPos::new((index / cols) as u32, (index % cols) as u32)
    }

    // ── Terrain queries ───────────────────────────────────────────────────

    /// Terrain at `pos`, or `None` if `pos` is off the map.
    #[inline]
    pub fn cell_at(&self, pos: CellPos) -> Option<Terrain> {
        self.contains(pos).then(|| self.cells[self.index_of(pos)])
    }

    /// Terrain at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is off the map.  Use [`cell_at`](Self::cell_at) for
    /// unchecked input.
    #[inline]
    pub fn terrain(&self, pos: CellPos) -> Terrain {
        assert!(self.contains(pos), "cell {pos} is outside the {}x{} map", self.rows, self.cols);
        self.cells[self.index_of(pos)]
    }

    /// Every water cell in row-major order.
    #[inline]
    pub fn water_cells(&self) -> &[CellPos] {
        &self.water
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// `true` if stepping from `pos` in `dir` stays on the map.
    #[inline]
    pub fn neighbor_exists(&self, pos: CellPos, dir: Direction) -> bool {
        pos.step(dir).is_some_and(|n| self.contains(n))
    }

    /// The cell one step from `pos` in `dir`.
    ///
    /// # Errors
    /// [`MapError::InvalidDirection`] if that step leaves the map.
    pub fn neighbor(&self, pos: CellPos, dir: Direction) -> MapResult<CellPos> {
        pos.step(dir)
            .filter(|n| self.contains(*n))
            .ok_or(MapError::InvalidDirection { pos, direction: dir })
    }

    /// Existing neighbours of `pos` in N, S, E, W order.
    pub fn neighbors(&self, pos: CellPos) -> impl Iterator<Item = (Direction, CellPos)> + '_ {
        Direction::ALL.into_iter().filter_map(move |dir| {
            pos.step(dir).filter(|n| self.contains(*n)).map(|n| (dir, n))
        })
    }

    /// Iterator over every cell position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = CellPos> + '_ {
        (0..self.cells.len()).map(|i| self.pos_of(i))
    }

    /// Render the map using the glyphs of [`Terrain::as_char`], one line per row.
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.iter().map(|t| t.as_char()).collect())
            .collect()
    }
}

// ── MapBuilder ────────────────────────────────────────────────────────────────

/// Construct a [`TerrainMap`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use ff_core::{CellPos, Terrain};
/// use ff_map::MapBuilder;
///
/// let mut b = MapBuilder::new(2, 3, 100.0);
/// b.set(CellPos::new(1, 2), Terrain::Water).unwrap();
/// let map = b.build().unwrap();
/// assert_eq!(map.water_cells(), &[CellPos::new(1, 2)]);
/// ```
pub struct MapBuilder {
    rows:        u32,
    cols:        u32,
    cell_size_m: f64,
    cells:       Vec<Terrain>,
}

impl MapBuilder {
    /// A `rows × cols` builder with every cell [`Terrain::Open`].
    pub fn new(rows: u32, cols: u32, cell_size_m: f64) -> Self {
        Self {
            rows,
            cols,
            cell_size_m,
            cells: vec![Terrain::Open; rows as usize * cols as usize],
        }
    }

    /// Parse a compact text map, one string per row, one glyph per cell
    /// (`W` water, `F` forest, `R` rock, `.` open, `H` habitat).
    ///
    /// # Errors
    /// [`MapError::RaggedRows`] if rows differ in length,
    /// [`MapError::UnknownTerrainChar`] for any other glyph.
    pub fn from_rows(rows: &[&str], cell_size_m: f64) -> MapResult<Self> {
        let expected = rows.first().map_or(0, |r| r.chars().count());
        let mut b = Self::new(rows.len() as u32, expected as u32, cell_size_m);

        for (r, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != expected {
                return Err(MapError::RaggedRows { row: r, got, expected });
            }
            for (c, glyph) in line.chars().enumerate() {
                let pos = CellPos::new(r as u32, c as u32);
                let terrain = Terrain::from_char(glyph)
                    .ok_or(MapError::UnknownTerrainChar { glyph, pos })?;
                b.set(pos, terrain)?;
            }
        }
        Ok(b)
    }

    /// Assign terrain to one cell.
    pub fn set(&mut self, pos: CellPos, terrain: Terrain) -> MapResult<&mut Self> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return Err(MapError::OutOfBounds(pos));
        }
        let i = pos.row as usize * self.cols as usize + pos.col as usize;
        self.cells[i] = terrain;
        Ok(self)
    }

    /// Assign `terrain` to every cell.
    pub fn fill(&mut self, terrain: Terrain) -> &mut Self {
        self.cells.fill(terrain);
        self
    }

    pub fn rows(&self) -> u32 { self.rows }
    pub fn cols(&self) -> u32 { self.cols }

    /// Validate and freeze the map.
    ///
    /// # Errors
    /// [`MapError::EmptyMap`] for a zero dimension and
    /// [`MapError::InvalidCellSize`] for a non-positive or non-finite cell size.
    pub fn build(self) -> MapResult<TerrainMap> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MapError::EmptyMap { rows: self.rows, cols: self.cols });
        }
        if !(self.cell_size_m.is_finite() && self.cell_size_m > 0.0) {
            return Err(MapError::InvalidCellSize(self.cell_size_m));
        }

        let cols = self.cols as usize;
        let water = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_water())
            .map(|(i, _)| CellPos::new((i / cols) as u32, (i % cols) as u32))
            .collect();

        Ok(TerrainMap {
            rows:        self.rows,
            cols:        self.cols,
            cell_size_m: self.cell_size_m,
            cells:       self.cells,
            water,
        })
    }
}
