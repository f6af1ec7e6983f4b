//! Seeded synthetic terrain generation.
//!
//! Used by determinism and stress tests to produce varied maps without a
//! scenario file.  The same `(params, seed)` pair always yields the same map.

use ff_core::{CellPos, SimRng, Terrain};

use crate::{MapBuilder, MapResult, TerrainMap};

/// Terrain mix for [`synthetic`].  Fractions are per-cell probabilities,
/// checked in field order; whatever is left over becomes [`Terrain::Open`].
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticParams {
    pub rows:        u32,
    pub cols:        u32,
    pub cell_size_m: f64,
    pub water:       f64,
    pub forest:      f64,
    pub rock:        f64,
    pub habitat:     f64,
}

impl SyntheticParams {
    /// A `rows × cols` map with a moderate terrain mix.
    pub fn new(rows: u32, cols: u32, cell_size_m: f64) -> Self {
        Self {
            rows,
            cols,
            cell_size_m,
            water:   0.10,
            forest:  0.20,
            rock:    0.10,
            habitat: 0.10,
        }
    }
}

/// Generate a map from `params` using a `SimRng` seeded with `seed`.
///
/// # Errors
/// Same as [`MapBuilder::build`]: empty dimensions or a bad cell size.
pub fn synthetic(params: &SyntheticParams, seed: u64) -> MapResult<TerrainMap> {
    let mut rng = SimRng::new(seed);
    let mut b = MapBuilder::new(params.rows, params.cols, params.cell_size_m);

    let bands = [
        (params.water, Terrain::Water),
        (params.forest, Terrain::Forest),
        (params.rock, Terrain::Rock),
        (params.habitat, Terrain::Habitat),
    ];

    for row in 0..params.rows {
        for col in 0..params.cols {
            let roll: f64 = rng.gen_range(0.0..1.0);
            let mut acc = 0.0;
            let mut terrain = Terrain::Open;
            for (share, t) in bands {
                acc += share.max(0.0);
                if roll < acc {
                    terrain = t;
                    break;
                }
            }
            b.set(CellPos::new(row, col), terrain)?;
        }
    }
    b.build()
}
