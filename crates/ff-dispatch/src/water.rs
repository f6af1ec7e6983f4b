//! Finding the closest place a robot can draw water.
//!
//! Robots that can stand on water (drones) fly to a water cell.  Everyone
//! else draws water from a crossable cell next to one.

use rustc_hash::FxHashSet;

use ff_agent::Robot;
use ff_core::{CellPos, Terrain};
use ff_map::TerrainMap;
use ff_path::{Path, Planner};

/// Where to draw water and how to get there.
#[derive(Clone, Debug, PartialEq)]
pub struct WaterAccess {
    pub cell: CellPos,
    pub path: Path,
}

impl WaterAccess {
    #[inline]
    pub fn secs(&self) -> f64 {
        self.path.total_secs
    }
}

/// The fastest water access for `robot` starting from `from`, or `None`
/// when no water can be reached.
///
/// Candidates are tried in `water` order, and for robots that draw from a
/// neighbour, in N, S, E, W order around each water cell.  Only a strictly
/// faster candidate replaces the current best.
pub fn nearest_water(
    map:     &TerrainMap,
    water:   &[CellPos],
    from:    CellPos,
    robot:   &Robot,
    planner: &dyn Planner,
) -> Option<WaterAccess> {
    let mut best: Option<WaterAccess> = None;
    let mut seen = FxHashSet::default();

    for cell in access_cells(map, water, robot) {
        if !seen.insert(cell) {
            continue;
        }
        let Some(path) = planner.plan(map, from, cell, robot) else {
            continue;
        };
        if best.as_ref().is_none_or(|b| path.total_secs < b.secs()) {
            best = Some(WaterAccess { cell, path });
        }
    }
    best
}

fn access_cells<'a>(
    map:   &'a TerrainMap,
    water: &'a [CellPos],
    robot: &'a Robot,
) -> impl Iterator<Item = CellPos> + 'a {
    let direct = robot.can_traverse(Terrain::Water);
    water.iter().flat_map(move |&w| {
        let cells: Vec<CellPos> = if direct {
            vec![w]
        } else {
            map.neighbors(w)
                .map(|(_, n)| n)
                .filter(|n| robot.can_traverse(map.terrain(*n)))
                .collect()
        };
        cells
    })
}
