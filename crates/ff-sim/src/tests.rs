//! Integration tests for ff-sim.
//!
//! Maps use 1 km cells: a wheeled robot crosses an open cell in 45 s, a
//! tracked one in 60 s.

use ff_agent::RobotKind;
use ff_core::{CellPos, Direction, FireId, RobotId, SimConfig, SimTime};
use ff_dispatch::{DispatchPlan, GreedyDispatch};
use ff_path::DijkstraPlanner;
use ff_schedule::{Event, EventKind};

use crate::{NoopObserver, Sim, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn pos(row: u32, col: u32) -> CellPos {
    CellPos::new(row, col)
}

/// ```text
/// . . F*      robot at (0,0), fire (0,2) intensity 100
/// . . .
/// W . .
/// ```
fn three_by_three() -> Sim {
    SimBuilder::from_rows(&["...", "...", "W.."], 1000.0)
        .unwrap()
        .robot(RobotKind::Wheeled, pos(0, 0))
        .fire(pos(0, 2), 100)
        .build()
        .unwrap()
}

fn dispatch(sim: &mut Sim) -> DispatchPlan {
    sim.dispatch(&GreedyDispatch, &DijkstraPlanner).unwrap()
}

/// Records every executed event and every batch.
#[derive(Default)]
struct Recorder {
    events:   Vec<Event>,
    batches:  Vec<(SimTime, usize)>,
    restarts: usize,
}

impl SimObserver for Recorder {
    fn on_event(&mut self, _time: SimTime, event: &Event) {
        self.events.push(*event);
    }

    fn on_batch_end(&mut self, time: SimTime, executed: usize) {
        self.batches.push((time, executed));
    }

    fn on_restart(&mut self) {
        self.restarts += 1;
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_ids_in_insertion_order() {
        let sim = SimBuilder::from_rows(&["..", ".."], 100.0)
            .unwrap()
            .robot(RobotKind::Aerial, pos(0, 0))
            .robot(RobotKind::Legged, pos(1, 1))
            .fire(pos(0, 1), 10)
            .build()
            .unwrap();
        assert_eq!(sim.robots()[1].id(), RobotId(1));
        assert_eq!(sim.robots()[1].kind(), RobotKind::Legged);
        assert_eq!(sim.fires()[0].id(), FireId(0));
        assert_eq!(sim.current_time(), SimTime::ZERO);
        assert!(sim.is_finished());
    }

    #[test]
    fn robot_off_map_errors() {
        let err = SimBuilder::from_rows(&[".."], 100.0)
            .unwrap()
            .robot(RobotKind::Aerial, pos(3, 0))
            .build()
            .err();
        assert_eq!(err, Some(SimError::OutOfBounds { pos: pos(3, 0), what: "robot" }));
    }

    #[test]
    fn fire_off_map_errors() {
        let err = SimBuilder::from_rows(&[".."], 100.0).unwrap().fire(pos(0, 2), 5).build().err();
        assert_eq!(err, Some(SimError::OutOfBounds { pos: pos(0, 2), what: "fire" }));
    }

    #[test]
    fn robot_on_forbidden_terrain_errors() {
        let err = SimBuilder::from_rows(&["W."], 100.0)
            .unwrap()
            .robot(RobotKind::Wheeled, pos(0, 0))
            .build()
            .err();
        assert_eq!(
            err,
            Some(SimError::UntraversableStart {
                kind:    RobotKind::Wheeled,
                pos:     pos(0, 0),
                terrain: ff_core::Terrain::Water,
            })
        );
    }

    #[test]
    fn drone_may_start_on_water() {
        let sim = SimBuilder::from_rows(&["W."], 100.0)
            .unwrap()
            .robot(RobotKind::Aerial, pos(0, 0))
            .build();
        assert!(sim.is_ok());
    }

    #[test]
    fn speed_over_cap_errors() {
        let err = SimBuilder::from_rows(&[".."], 100.0)
            .unwrap()
            .robot_with_speed(RobotKind::Aerial, pos(0, 0), 200.0)
            .build()
            .err();
        assert!(matches!(err, Some(SimError::Agent(_))));
    }

    #[test]
    fn custom_speed_is_applied() {
        let sim = SimBuilder::from_rows(&[".."], 100.0)
            .unwrap()
            .robot_with_speed(RobotKind::Tracked, pos(0, 0), 75.0)
            .build()
            .unwrap();
        assert_eq!(sim.robots()[0].base_speed_kmh(), 75.0);
    }

    #[test]
    fn bad_map_text_errors() {
        assert!(matches!(SimBuilder::from_rows(&["..", "."], 100.0), Err(SimError::Map(_))));
    }

    #[test]
    fn zero_batch_limit_errors() {
        let cfg = SimConfig { max_batches: 0, ..SimConfig::default() };
        let err = SimBuilder::from_rows(&["."], 100.0).unwrap().config(cfg).build().err();
        assert!(matches!(err, Some(SimError::Config(_))));
    }
}

// ── Views ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod view_tests {
    use super::*;

    #[test]
    fn lookups_by_cell() {
        let sim = three_by_three();
        assert_eq!(sim.fire_at(pos(0, 2)).map(|f| f.id()), Some(FireId(0)));
        assert!(sim.fire_at(pos(1, 1)).is_none());
        assert_eq!(sim.robot_at(pos(0, 0)).map(|r| r.id()), Some(RobotId(0)));
        assert!(sim.robot_at(pos(0, 2)).is_none());
        assert_eq!(sim.water_cells(), &[pos(2, 0)]);
        assert!(sim.robot(RobotId(9)).is_none());
        assert!(sim.fire(FireId(9)).is_none());
    }

    #[test]
    fn snapshot_reflects_world() {
        let sim = three_by_three();
        let snap = sim.snapshot();
        assert_eq!(snap.time, SimTime::ZERO);
        assert_eq!(snap.robots.len(), 1);
        assert_eq!(snap.robots[0].reservoir, 5_000);
        assert_eq!(snap.robots[0].speed_kmh, 80.0);
        assert_eq!(snap.burning().count(), 1);
    }

    #[test]
    fn dispatch_fills_pending_events() {
        let mut sim = three_by_three();
        let plan = dispatch(&mut sim);
        assert_eq!(plan.event_count(), 3);
        let times: Vec<SimTime> = sim.pending_events().map(|e| e.time()).collect();
        assert_eq!(times, vec![SimTime(45), SimTime(90), SimTime(95)]);
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn second_dispatch_with_events_pending_is_refused() {
        let mut sim = three_by_three();
        dispatch(&mut sim);
        let err = sim.dispatch(&GreedyDispatch, &DijkstraPlanner).err();
        assert_eq!(err, Some(SimError::DispatchPending(3)));

        assert_eq!(sim.pending_events().count(), 3);
        assert_eq!(sim.run_to_completion(), Ok(3));
        assert_eq!(sim.robots()[0].position(), pos(0, 2));
    }

    #[test]
    fn dispatch_mid_playback_is_refused() {
        let mut sim = three_by_three();
        dispatch(&mut sim);
        sim.advance_to_next_batch();
        sim.advance_to_next_batch();
        let err = sim.dispatch(&GreedyDispatch, &DijkstraPlanner).err();
        assert_eq!(err, Some(SimError::DispatchPending(2)));
        assert_eq!(sim.run_to_completion(), Ok(2));
    }

    #[test]
    fn dispatch_after_playback_starts_from_the_world() {
        let mut sim = three_by_three();
        dispatch(&mut sim);
        sim.run_to_completion().unwrap();

        let plan = dispatch(&mut sim);
        assert!(plan.assignments.is_empty());
        assert!(plan.unassigned.is_empty());
        assert_eq!(plan.final_states[0].position, pos(0, 2));
        assert_eq!(plan.final_states[0].time, SimTime(95));
        assert!(sim.is_finished());
    }

    #[test]
    fn dispatch_after_restart_is_refused() {
        let mut sim = three_by_three();
        dispatch(&mut sim);
        sim.run_to_completion().unwrap();
        sim.restart();
        let err = sim.dispatch(&GreedyDispatch, &DijkstraPlanner).err();
        assert_eq!(err, Some(SimError::DispatchPending(3)));
    }

    #[test]
    fn crawling_robot_leaves_fire_unassigned() {
        let mut sim = SimBuilder::from_rows(&[".."], 1000.0)
            .unwrap()
            .robot_with_speed(RobotKind::Wheeled, pos(0, 0), 1e-300)
            .fire(pos(0, 1), 100)
            .build()
            .unwrap();
        let plan = dispatch(&mut sim);
        assert_eq!(plan.unassigned, vec![FireId(0)]);
        assert!(sim.is_finished());
        assert_eq!(sim.run_to_completion(), Ok(0));
        assert_eq!(sim.fires()[0].intensity(), 100);
    }

    #[test]
    fn oversized_cells_leave_fire_unassigned() {
        let mut sim = SimBuilder::from_rows(&[".."], 1e300)
            .unwrap()
            .robot(RobotKind::Wheeled, pos(0, 0))
            .fire(pos(0, 1), 100)
            .build()
            .unwrap();
        let plan = dispatch(&mut sim);
        assert_eq!(plan.unassigned, vec![FireId(0)]);
        assert_eq!(plan.event_count(), 0);
    }
}

// ── Playback ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod playback_tests {
    use super::*;

    #[test]
    fn three_by_three_end_to_end() {
        let mut sim = three_by_three();
        dispatch(&mut sim);
        let executed = sim.run_to_completion().unwrap();

        assert_eq!(executed, 3);
        assert!(sim.is_finished());
        assert!(sim.fires()[0].is_extinguished());
        let robot = &sim.robots()[0];
        assert_eq!(robot.position(), pos(0, 2));
        assert_eq!(robot.reservoir(), 4_900);
        assert_eq!(sim.current_time(), SimTime(95));
    }

    #[test]
    fn batches_step_through_due_times() {
        let mut sim = three_by_three();
        dispatch(&mut sim);

        // Nothing due at t=0; the clock jumps to the first arrival.
        assert_eq!(sim.advance_to_next_batch(), 0);
        assert_eq!(sim.current_time(), SimTime(45));

        assert_eq!(sim.advance_one_step(), 1);
        assert_eq!(sim.robots()[0].position(), pos(0, 1));
        assert_eq!(sim.current_time(), SimTime(90));

        assert_eq!(sim.advance_to_next_batch(), 1);
        assert_eq!(sim.current_time(), SimTime(95));
        assert_eq!(sim.fires()[0].intensity(), 100);

        assert_eq!(sim.advance_to_next_batch(), 1);
        assert_eq!(sim.fires()[0].intensity(), 0);
        assert!(sim.is_finished());

        // Empty queue: nothing runs and the clock stays put.
        assert_eq!(sim.advance_to_next_batch(), 0);
        assert_eq!(sim.current_time(), SimTime(95));
    }

    #[test]
    fn same_time_events_run_in_one_batch_in_schedule_order() {
        let mut sim = SimBuilder::from_rows(&["..."], 1000.0)
            .unwrap()
            .robot(RobotKind::Aerial, pos(0, 1))
            .build()
            .unwrap();
        sim.schedule(SimTime(0), EventKind::Move { robot: RobotId(0), direction: Direction::East });
        sim.schedule(SimTime(0), EventKind::Move { robot: RobotId(0), direction: Direction::West });
        sim.schedule(SimTime(0), EventKind::Move { robot: RobotId(0), direction: Direction::West });

        let mut rec = Recorder::default();
        assert_eq!(sim.advance_observed(&mut rec), 3);
        assert_eq!(sim.robots()[0].position(), pos(0, 0));
        let seqs: Vec<u64> = rec.events.iter().map(|e| e.seq()).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
        assert_eq!(rec.batches, vec![(SimTime(0), 3)]);
    }

    #[test]
    fn move_rederives_speed() {
        let mut sim = SimBuilder::from_rows(&[".H"], 1000.0)
            .unwrap()
            .robot(RobotKind::Wheeled, pos(0, 0))
            .build()
            .unwrap();
        sim.schedule(SimTime(0), EventKind::Move { robot: RobotId(0), direction: Direction::East });
        sim.advance_to_next_batch();
        assert_eq!(sim.robots()[0].speed_kmh(), 40.0);
    }

    #[test]
    fn water_locked_fire_produces_nothing() {
        let mut sim = SimBuilder::from_rows(&[".W.", "WWW"], 1000.0)
            .unwrap()
            .robot(RobotKind::Wheeled, pos(0, 0))
            .fire(pos(0, 2), 100)
            .build()
            .unwrap();
        let plan = dispatch(&mut sim);

        assert_eq!(plan.event_count(), 0);
        assert_eq!(plan.unassigned, vec![FireId(0)]);
        assert!(sim.is_finished());
        assert_eq!(sim.run_to_completion(), Ok(0));
        assert_eq!(sim.fires()[0].intensity(), 100);
    }

    #[test]
    fn multi_trip_delivers_exact_intensity() {
        let mut sim = SimBuilder::from_rows(&["W.."], 1000.0)
            .unwrap()
            .robot(RobotKind::Tracked, pos(0, 1))
            .fire(pos(0, 2), 5_000)
            .build()
            .unwrap();
        dispatch(&mut sim);

        let mut rec = Recorder::default();
        sim.run_observed(&mut rec).unwrap();

        let refills: Vec<u32> = rec
            .events
            .iter()
            .filter_map(|e| match e.kind() {
                EventKind::Refill { volume, .. } => Some(*volume),
                _ => None,
            })
            .collect();
        assert_eq!(refills.len(), 3);
        // Starts full, so 2000 L are carried in and 3000 L drawn on the way.
        assert_eq!(refills.iter().sum::<u32>(), 3_000);
        assert!(sim.fires()[0].is_extinguished());
        assert_eq!(sim.robots()[0].reservoir(), 0);
        assert_eq!(sim.current_time(), SimTime(1_150));
    }

    #[test]
    fn intervene_uses_only_what_is_needed() {
        let mut sim = SimBuilder::from_rows(&[".."], 1000.0)
            .unwrap()
            .robot(RobotKind::Tracked, pos(0, 0))
            .fire(pos(0, 0), 300)
            .build()
            .unwrap();
        sim.schedule(SimTime(1), EventKind::Intervene { robot: RobotId(0), fire: FireId(0) });
        sim.run_to_completion().unwrap();
        assert_eq!(sim.robots()[0].reservoir(), 1_700);
        assert!(sim.fires()[0].is_extinguished());
    }

    #[test]
    fn intervene_with_too_little_water_leaves_fire_burning() {
        let mut sim = SimBuilder::from_rows(&[".."], 1000.0)
            .unwrap()
            .robot(RobotKind::Tracked, pos(0, 0))
            .fire(pos(0, 0), 2_500)
            .build()
            .unwrap();
        sim.schedule(SimTime(1), EventKind::Intervene { robot: RobotId(0), fire: FireId(0) });
        sim.run_to_completion().unwrap();
        assert_eq!(sim.robots()[0].reservoir(), 0);
        assert_eq!(sim.fires()[0].intensity(), 500);
    }

    #[test]
    fn batch_limit_is_enforced() {
        let cfg = SimConfig { max_batches: 2, ..SimConfig::default() };
        let mut sim = SimBuilder::from_rows(&["...", "...", "W.."], 1000.0)
            .unwrap()
            .robot(RobotKind::Wheeled, pos(0, 0))
            .fire(pos(0, 2), 100)
            .config(cfg)
            .build()
            .unwrap();
        dispatch(&mut sim);
        assert_eq!(sim.run_to_completion(), Err(SimError::BatchLimit(2)));
        assert!(!sim.is_finished());
    }

    #[test]
    fn start_time_offsets_dispatch() {
        let cfg = SimConfig { start_time: SimTime(600), ..SimConfig::default() };
        let mut sim = SimBuilder::from_rows(&["..."], 1000.0)
            .unwrap()
            .robot(RobotKind::Wheeled, pos(0, 0))
            .fire(pos(0, 2), 100)
            .config(cfg)
            .build()
            .unwrap();
        assert_eq!(sim.current_time(), SimTime(600));
        dispatch(&mut sim);
        sim.run_to_completion().unwrap();
        assert_eq!(sim.current_time(), SimTime(695));
    }
}

// ── Invariant violations ──────────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use super::*;

    #[test]
    #[should_panic(expected = "no neighbour")]
    fn move_off_map_panics() {
        let mut sim = SimBuilder::from_rows(&[".."], 100.0)
            .unwrap()
            .robot(RobotKind::Aerial, pos(0, 0))
            .build()
            .unwrap();
        sim.schedule(SimTime(0), EventKind::Move { robot: RobotId(0), direction: Direction::North });
        sim.advance_to_next_batch();
    }

    #[test]
    #[should_panic(expected = "cannot enter water")]
    fn move_onto_forbidden_terrain_panics() {
        let mut sim = SimBuilder::from_rows(&[".W"], 100.0)
            .unwrap()
            .robot(RobotKind::Wheeled, pos(0, 0))
            .build()
            .unwrap();
        sim.schedule(SimTime(0), EventKind::Move { robot: RobotId(0), direction: Direction::East });
        sim.advance_to_next_batch();
    }

    #[test]
    #[should_panic(expected = "RobotId(4)")]
    fn unknown_robot_panics() {
        let mut sim = three_by_three();
        sim.schedule(SimTime(0), EventKind::Refill { robot: RobotId(4), volume: 1 });
        sim.advance_to_next_batch();
    }

    #[test]
    #[should_panic(expected = "FireId(7)")]
    fn unknown_fire_panics() {
        let mut sim = three_by_three();
        sim.schedule(SimTime(0), EventKind::Intervene { robot: RobotId(0), fire: FireId(7) });
        sim.advance_to_next_batch();
    }
}

// ── Restart ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod restart_tests {
    use super::*;

    fn two_robot_sim() -> Sim {
        SimBuilder::from_rows(&["W....", ".....", "..H.."], 1000.0)
            .unwrap()
            .robot(RobotKind::Tracked, pos(1, 1))
            .robot(RobotKind::Wheeled, pos(2, 4))
            .fire(pos(0, 4), 3_000)
            .fire(pos(2, 0), 200)
            .build()
            .unwrap()
    }

    #[test]
    fn replay_after_restart_is_identical() {
        let mut sim = two_robot_sim();
        dispatch(&mut sim);
        let before = sim.snapshot();
        let pending: Vec<Event> = sim.pending_events().copied().collect();

        let mut first = Recorder::default();
        sim.run_observed(&mut first).unwrap();
        let end_first = sim.snapshot();

        sim.restart_observed(&mut first);
        assert_eq!(first.restarts, 1);
        assert_eq!(sim.snapshot(), before);
        assert_eq!(sim.pending_events().copied().collect::<Vec<_>>(), pending);

        let mut second = Recorder::default();
        sim.run_observed(&mut second).unwrap();
        assert_eq!(first.events, second.events);
        assert_eq!(first.batches, second.batches);
        assert_eq!(sim.snapshot(), end_first);
    }

    #[test]
    fn restart_mid_playback() {
        let mut sim = three_by_three();
        dispatch(&mut sim);
        sim.advance_to_next_batch();
        sim.advance_to_next_batch();
        assert_eq!(sim.robots()[0].position(), pos(0, 1));

        sim.restart();
        assert_eq!(sim.robots()[0].position(), pos(0, 0));
        assert_eq!(sim.current_time(), SimTime::ZERO);
        assert_eq!(sim.pending_events().count(), 3);
        assert_eq!(sim.run_to_completion(), Ok(3));
        assert!(sim.fires()[0].is_extinguished());
    }

    #[test]
    fn restart_before_playback_keeps_planned_events() {
        let mut sim = three_by_three();
        dispatch(&mut sim);
        sim.restart();
        assert_eq!(sim.pending_events().count(), 3);
        sim.restart();
        assert_eq!(sim.run_to_completion(), Ok(3));
    }

    #[test]
    fn restart_restores_speed_and_reservoir() {
        let mut sim = SimBuilder::from_rows(&["H."], 1000.0)
            .unwrap()
            .robot_with_speed(RobotKind::Wheeled, pos(0, 0), 120.0)
            .fire(pos(0, 1), 100)
            .build()
            .unwrap();
        let saved = sim.robots()[0].clone();
        assert_eq!(saved.speed_kmh(), 60.0);

        sim.schedule(SimTime(1), EventKind::Move { robot: RobotId(0), direction: Direction::East });
        sim.schedule(SimTime(2), EventKind::Intervene { robot: RobotId(0), fire: FireId(0) });
        sim.run_to_completion().unwrap();
        assert_eq!(sim.robots()[0].speed_kmh(), 120.0);
        assert_eq!(sim.robots()[0].reservoir(), 4_900);

        sim.restart();
        assert_eq!(sim.robots()[0], saved);
        assert_eq!(sim.fires()[0].intensity(), 100);
    }
}

// ── Planning vs. playback ─────────────────────────────────────────────────────

#[cfg(test)]
mod reconciliation_tests {
    use proptest::prelude::*;

    use ff_core::Terrain;
    use ff_map::{SyntheticParams, synthetic};

    use super::*;

    /// After full playback every robot stands where planning left it, holds
    /// the planned reservoir, and its last event ran at the planned time.
    fn assert_reconciled(sim: &Sim, plan: &DispatchPlan, rec: &Recorder) {
        for robot in sim.robots() {
            let state = &plan.final_states[robot.id().index()];
            assert_eq!(robot.position(), state.position, "{}", robot.id());
            assert_eq!(robot.reservoir(), state.reservoir, "{}", robot.id());
            let last = rec
                .events
                .iter()
                .filter(|e| e.kind().robot() == robot.id())
                .map(|e| e.time())
                .last()
                .unwrap_or(sim.config().start_time);
            assert_eq!(last, state.time, "{}", robot.id());
        }
    }

    #[test]
    fn handmade_scenario_reconciles() {
        let mut sim = SimBuilder::from_rows(&["W...F", ".R...", "..H.W"], 1000.0)
            .unwrap()
            .robot(RobotKind::Tracked, pos(1, 0))
            .robot(RobotKind::Wheeled, pos(2, 3))
            .robot(RobotKind::Legged, pos(0, 2))
            .fire(pos(0, 3), 4_500)
            .fire(pos(2, 1), 800)
            .fire(pos(1, 4), 12_000)
            .build()
            .unwrap();
        let plan = dispatch(&mut sim);
        let mut rec = Recorder::default();
        sim.run_observed(&mut rec).unwrap();

        assert!(plan.unassigned.is_empty());
        assert!(sim.fires().iter().all(|f| f.is_extinguished()));
        assert_reconciled(&sim, &plan, &rec);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn synthetic_scenarios_reconcile(
            seed in any::<u64>(),
            fire_layout in prop::collection::vec(((0u32..7, 0u32..7), 1u32..15_000), 1..5),
        ) {
            let mut params = SyntheticParams::new(7, 7, 300.0);
            params.water = 0.15;
            let map = synthetic(&params, seed).unwrap();

            let mut builder = SimBuilder::new(map.clone()).robot(RobotKind::Aerial, pos(0, 0));
            for (kind, wanted) in [(RobotKind::Wheeled, Terrain::Open), (RobotKind::Legged, Terrain::Forest)] {
                if let Some(p) = map.positions().find(|p| map.terrain(*p) == wanted) {
                    builder = builder.robot(kind, p);
                }
            }
            for &((r, c), intensity) in &fire_layout {
                builder = builder.fire(pos(r, c), intensity);
            }
            let mut sim = builder.build().unwrap();

            let plan = dispatch(&mut sim);
            let mut rec = Recorder::default();
            let executed = sim.run_observed(&mut rec).unwrap();
            prop_assert_eq!(executed, plan.event_count());

            assert_reconciled(&sim, &plan, &rec);
            for a in &plan.assignments {
                prop_assert!(sim.fire(a.fire).is_some_and(|f| f.is_extinguished()));
            }
            for id in &plan.unassigned {
                prop_assert!(sim.fire(*id).is_some_and(|f| !f.is_extinguished()));
            }
        }
    }

    #[test]
    fn noop_observer_runs() {
        let mut sim = three_by_three();
        dispatch(&mut sim);
        assert_eq!(sim.run_observed(&mut NoopObserver), Ok(3));
    }
}
