//! Greedy fire-by-fire dispatch.
//!
//! # Algorithm
//!
//! Fires are taken in [`visit_order`].  For each fire still burning, every
//! robot's cost is estimated from its [`DispatchState`]:
//!
//! ```text
//! direct  (reservoir >= intensity):
//!     travel(pos -> fire) + prior + intervention(intensity)
//!
//! refill  (reservoir <  intensity), trips = ceil(intensity / capacity):
//!     water(pos) + fill(first top-up) + travel(water -> fire)
//!   + intervention(first delivery) + prior
//!   + (trips - 1) * (2 * water(fire) + fill(capacity) + intervention(capacity))
//! ```
//!
//! where `prior` is the seconds already committed to the robot.  The
//! cheapest robot wins (ties keep the earlier robot), its events are
//! emitted and its state advanced, so later fires see the new position,
//! reservoir and time.

use tracing::{debug, info, warn};

use ff_agent::{Fire, Robot};
use ff_core::{CellPos, RobotId, SimTime};
use ff_map::TerrainMap;
use ff_path::{Path, Planner, path_secs};
use ff_schedule::EventKind;

use crate::{
    Assignment, DispatchPlan, DispatchState, Strategy, nearest_water, visit_order,
};

/// Assigns each fire to the robot that can finish it soonest.
#[derive(Copy, Clone, Debug, Default)]
pub struct GreedyDispatch;

impl Strategy for GreedyDispatch {
    fn plan(
        &self,
        map:     &TerrainMap,
        robots:  &[Robot],
        fires:   &[Fire],
        water:   &[CellPos],
        start:   SimTime,
        planner: &dyn Planner,
    ) -> DispatchPlan {
        info!(robots = robots.len(), fires = fires.len(), %start, "dispatch started");

        let ctx = Ctx { map, water, start, planner };
        let mut plan = DispatchPlan {
            final_states: robots.iter().map(|r| DispatchState::idle(r, start)).collect(),
            ..DispatchPlan::default()
        };

        for fi in visit_order(fires) {
            let fire = &fires[fi];
            if fire.is_extinguished() {
                debug!(fire = %fire.id(), "already out, skipped");
                continue;
            }

            let mut best: Option<(usize, f64)> = None;
            for (ri, robot) in robots.iter().enumerate() {
                let cost = ctx.estimate(robot, &plan.final_states[ri], fire);
                if cost.is_finite() && best.is_none_or(|(_, c)| cost < c) {
                    best = Some((ri, cost));
                }
            }

            let committed = best.and_then(|(ri, cost)| {
                ctx.commit(&robots[ri], &plan.final_states[ri], fire, cost).map(|c| (ri, cost, c))
            });
            let Some((ri, cost, commit)) = committed else {
                warn!(fire = %fire.id(), pos = %fire.position(), "no robot can reach fire, skipped");
                plan.unassigned.push(fire.id());
                continue;
            };

            debug!(
                fire   = %fire.id(),
                robot  = %robots[ri].id(),
                cost   = cost,
                trips  = commit.trips,
                finish = %commit.state.time,
                "fire assigned"
            );
            plan.assignments.push(Assignment {
                fire:      fire.id(),
                robot:     robots[ri].id(),
                cost_secs: cost,
                trips:     commit.trips,
                finish:    commit.state.time,
            });
            plan.events.extend(commit.events);
            plan.final_states[ri] = commit.state;
        }

        info!(
            assigned   = plan.assignments.len(),
            unassigned = plan.unassigned.len(),
            events     = plan.event_count(),
            "dispatch finished"
        );
        plan
    }
}

// ── Internals ─────────────────────────────────────────────────────────────────

/// The read-only inputs shared by every estimate of one dispatch pass.
struct Ctx<'a> {
    map:     &'a TerrainMap,
    water:   &'a [CellPos],
    start:   SimTime,
    planner: &'a dyn Planner,
}

/// Events and end state of one accepted assignment.
struct Commit {
    events: Vec<(SimTime, EventKind)>,
    state:  DispatchState,
    trips:  u32,
}

/// Number of water runs needed to deliver `intensity` with a `capacity`
/// reservoir.
fn trips_needed(intensity: u32, capacity: u32) -> u32 {
    intensity.div_ceil(capacity.max(1))
}

impl Ctx<'_> {
    fn travel(&self, robot: &Robot, from: CellPos, to: CellPos) -> f64 {
        path_secs(self.planner, self.map, from, to, robot)
    }

    fn water_secs(&self, robot: &Robot, from: CellPos) -> f64 {
        nearest_water(self.map, self.water, from, robot, self.planner)
            .map_or(f64::INFINITY, |w| w.secs())
    }

    /// Estimated completion cost in seconds; infinite when unreachable or
    /// when the finish would fall past the last representable `SimTime`.
    fn estimate(&self, robot: &Robot, state: &DispatchState, fire: &Fire) -> f64 {
        let cost = self.raw_estimate(robot, state, fire);
        match self.start.checked_after_secs(cost) {
            Some(_) => cost,
            None => f64::INFINITY,
        }
    }

    fn raw_estimate(&self, robot: &Robot, state: &DispatchState, fire: &Fire) -> f64 {
        let kind = robot.kind();
        let intensity = fire.intensity();
        let prior = state.time.since(self.start) as f64;

        if state.reservoir >= intensity {
            return self.travel(robot, state.position, fire.position())
                + prior
                + kind.intervention_time(intensity);
        }

        let Some(access) = nearest_water(self.map, self.water, state.position, robot, self.planner)
        else {
            return f64::INFINITY;
        };
        let capacity = robot.capacity();
        let first = capacity.min(intensity);
        let top_up = first.saturating_sub(state.reservoir);
        let mut cost = access.secs()
            + kind.fill_time(top_up)
            + self.travel(robot, access.cell, fire.position())
            + kind.intervention_time(first)
            + prior;

        let trips = trips_needed(intensity, capacity);
        if trips > 1 {
            let round = 2.0 * self.water_secs(robot, fire.position())
                + kind.fill_time(capacity)
                + kind.intervention_time(capacity);
            cost += (trips - 1) as f64 * round;
        }
        cost
    }

    /// Lay out the concrete events for `robot` on `fire`.
    ///
    /// Returns `None` if a leg the estimate relied on cannot be planned or
    /// a timestamp would overflow, in which case nothing is committed.
    fn commit(
        &self,
        robot: &Robot,
        state: &DispatchState,
        fire:  &Fire,
        cost:  f64,
    ) -> Option<Commit> {
        let kind = robot.kind();
        let id = robot.id();
        let mut events = Vec::new();
        let mut t = state.time;
        let mut pos = state.position;
        let mut reservoir = state.reservoir;
        let mut remaining = fire.intensity();
        let mut trips = 0;

        if reservoir < remaining {
            trips = trips_needed(remaining, robot.capacity());
            for _ in 0..trips {
                let access = nearest_water(self.map, self.water, pos, robot, self.planner)?;
                t = emit_moves(&mut events, id, &access.path, t)?;

                let target = robot.capacity().min(remaining);
                let volume = target.saturating_sub(reservoir);
                t = t.checked_after_secs(kind.fill_time(volume))?;
                events.push((t, EventKind::Refill { robot: id, volume }));
                reservoir += volume;

                let to_fire = self.planner.plan(self.map, access.cell, fire.position(), robot)?;
                t = emit_moves(&mut events, id, &to_fire, t)?;
                pos = fire.position();

                let used = reservoir.min(remaining);
                t = t.checked_after_secs(kind.intervention_time(used))?;
                events.push((t, EventKind::Intervene { robot: id, fire: fire.id() }));
                reservoir = discharge(robot, reservoir, used);
                remaining -= used;
            }
        } else {
            let path = self.planner.plan(self.map, pos, fire.position(), robot)?;
            t = emit_moves(&mut events, id, &path, t)?;
            pos = fire.position();

            let used = remaining;
            t = t.checked_after_secs(kind.intervention_time(used))?;
            events.push((t, EventKind::Intervene { robot: id, fire: fire.id() }));
            reservoir = discharge(robot, reservoir, used);
        }

        Some(Commit {
            events,
            state: DispatchState { estimated_finish: cost, position: pos, reservoir, time: t },
            trips,
        })
    }
}

/// One `Move` per step of `path`, each stamped at arrival.  Returns the
/// arrival time at the end of the path, or `None` on timestamp overflow.
fn emit_moves(
    events: &mut Vec<(SimTime, EventKind)>,
    robot:  RobotId,
    path:   &Path,
    mut t:  SimTime,
) -> Option<SimTime> {
    for (direction, secs) in path.moves() {
        t = t.checked_after_secs(secs)?;
        events.push((t, EventKind::Move { robot, direction }));
    }
    Some(t)
}

/// Reservoir level after pouring `used` litres, mirroring `Robot::discharge`.
fn discharge(robot: &Robot, reservoir: u32, used: u32) -> u32 {
    if robot.kind().has_unlimited_reservoir() { reservoir } else { reservoir - used }
}
