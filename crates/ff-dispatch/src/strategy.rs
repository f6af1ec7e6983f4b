//! The `Strategy` trait.

use ff_agent::{Fire, Robot};
use ff_core::{CellPos, SimTime};
use ff_map::TerrainMap;
use ff_path::Planner;

use crate::DispatchPlan;

/// Pluggable dispatch policy.
///
/// A strategy sees the world read-only: the map, the robot roster (indexed
/// by `RobotId`), the fires (indexed by `FireId`) and the water cells.  It
/// returns the events it wants played back, timed from `start`.
///
/// # Example
///
/// ```rust,ignore
/// struct DoNothing;
///
/// impl Strategy for DoNothing {
///     fn plan(&self, _: &TerrainMap, robots: &[Robot], fires: &[Fire], _: &[CellPos],
///             start: SimTime, _: &dyn Planner) -> DispatchPlan {
///         DispatchPlan {
///             unassigned:   fires.iter().map(|f| f.id()).collect(),
///             final_states: robots.iter().map(|r| DispatchState::idle(r, start)).collect(),
///             ..DispatchPlan::default()
///         }
///     }
/// }
/// ```
pub trait Strategy {
    fn plan(
        &self,
        map:     &TerrainMap,
        robots:  &[Robot],
        fires:   &[Fire],
        water:   &[CellPos],
        start:   SimTime,
        planner: &dyn Planner,
    ) -> DispatchPlan;
}
