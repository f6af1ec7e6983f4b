//! Planning trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The dispatcher calls planning through the [`Planner`] trait, so an A* or
//! a precomputed all-pairs table can stand in for [`DijkstraPlanner`]
//! without touching dispatch code.
//!
//! # Cost units
//!
//! Costs are `f64` seconds.  Crossing one cell costs
//! `cell_size_m * 3600 / (speed_kmh * 1000)`, where `speed_kmh` is the
//! speed the robot has on the *destination* cell.  Speeds come from the
//! robot's base speed and the terrain, never from its current speed, so a
//! plan does not depend on where the robot happens to stand.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use ff_agent::Robot;
use ff_core::{CellPos, Direction, Terrain};
use ff_map::TerrainMap;

use crate::{Path, PathStep};

// ── Planner trait ─────────────────────────────────────────────────────────────

pub trait Planner {
    /// Fastest path for `robot` from `start` to `goal`.
    ///
    /// Returns `None` if `start` or `goal` is off the map, the goal terrain
    /// cannot be crossed by the robot, or no chain of crossable cells joins
    /// them.  `start == goal` on crossable terrain is a trivial path.
    fn plan(&self, map: &TerrainMap, start: CellPos, goal: CellPos, robot: &Robot) -> Option<Path>;
}

/// Travel time of the fastest path, or `f64::INFINITY` when there is none.
pub fn path_secs<P: Planner + ?Sized>(
    planner: &P,
    map:     &TerrainMap,
    start:   CellPos,
    goal:    CellPos,
    robot:   &Robot,
) -> f64 {
    planner.plan(map, start, goal, robot).map_or(f64::INFINITY, |p| p.total_secs)
}

/// Seconds for `robot` to cross one cell of `terrain`, or `None` if it
/// cannot.
#[inline]
pub fn edge_secs(cell_size_m: f64, robot: &Robot, terrain: Terrain) -> Option<f64> {
    let speed = robot.speed_on(terrain);
    (speed > 0.0).then(|| cell_size_m * 3600.0 / (speed * 1000.0))
}

// ── DijkstraPlanner ───────────────────────────────────────────────────────────

/// Dijkstra's algorithm over the 4-connected grid.
///
/// Neighbours are expanded in N, S, E, W order and heap ties are broken by
/// row-major cell index, so the same query always returns the same path.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraPlanner;

impl Planner for DijkstraPlanner {
    fn plan(&self, map: &TerrainMap, start: CellPos, goal: CellPos, robot: &Robot) -> Option<Path> {
        dijkstra(map, start, goal, robot)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap key.  Costs are finite and non-negative, so `total_cmp` is a true
/// total order over the values that occur.
#[derive(Copy, Clone, PartialEq)]
struct Secs(f64);

impl Eq for Secs {}

impl PartialOrd for Secs {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Secs {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

fn dijkstra(map: &TerrainMap, start: CellPos, goal: CellPos, robot: &Robot) -> Option<Path> {
    let goal_terrain = map.cell_at(goal)?;
    map.cell_at(start)?;
    if !robot.can_traverse(goal_terrain) {
        return None;
    }
    if start == goal {
        return Some(Path::trivial(start));
    }

    let n = map.cell_count();
    let cell = map.cell_size_m();
    // dist[v] = best known seconds to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev[v] = (predecessor index, direction taken, edge secs).
    let mut prev: Vec<Option<(usize, Direction, f64)>> = vec![None; n];

    let from = map.index_of(start);
    let to   = map.index_of(goal);
    dist[from] = 0.0;

    let mut heap: BinaryHeap<Reverse<(Secs, usize)>> = BinaryHeap::new();
    heap.push(Reverse((Secs(0.0), from)));

    while let Some(Reverse((Secs(cost), node))) = heap.pop() {
        if node == to {
            return Some(reconstruct(map, &prev, from, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[node] {
            continue;
        }

        for (dir, next) in map.neighbors(map.pos_of(node)) {
            let Some(step) = edge_secs(cell, robot, map.terrain(next)) else {
                continue;
            };
            let j = map.index_of(next);
            let new_cost = cost + step;
            if new_cost < dist[j] {
                dist[j] = new_cost;
                prev[j] = Some((node, dir, step));
                heap.push(Reverse((Secs(new_cost), j)));
            }
        }
    }

    None
}

fn reconstruct(
    map:   &TerrainMap,
    prev:  &[Option<(usize, Direction, f64)>],
    from:  usize,
    to:    usize,
    total: f64,
) -> Path {
    let mut steps = Vec::new();
    let mut cur = to;
    while cur != from {
        let Some((p, dir, secs)) = prev[cur] else { break };
        steps.push(PathStep { pos: map.pos_of(cur), direction: Some(dir), secs });
        cur = p;
    }
    steps.push(PathStep { pos: map.pos_of(from), direction: None, secs: 0.0 });
    steps.reverse();
    Path { steps, total_secs: total }
}
