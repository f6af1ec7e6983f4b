//! The `Sim` struct and its batch loop.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use ff_agent::{Fire, Robot};
use ff_core::{CellPos, FireId, RobotId, SimConfig, SimTime};
use ff_dispatch::{DispatchPlan, Strategy};
use ff_map::TerrainMap;
use ff_path::Planner;
use ff_schedule::{Event, EventKind, EventQueue, EventSeq};

use crate::{FireView, NoopObserver, RobotView, SimError, SimObserver, SimResult, WorldSnapshot};

// ── Restart snapshot ──────────────────────────────────────────────────────────

/// World state captured for [`Sim::restart`].
struct Initial {
    robots:      Vec<Robot>,
    intensities: Vec<u32>,
    /// Pending events as of the first advance.  `None` until then.
    queue:       Option<EventQueue>,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The discrete-event simulation: a terrain map, the robots and fires on it,
/// and the clock that plays scheduled events back.
///
/// The clock only moves forward, and only to due times of pending events.
/// Every mutation of a robot or fire happens by executing an event.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    config:     SimConfig,
    map:        TerrainMap,
    robots:     Vec<Robot>,
    fires:      Vec<Fire>,
    queue:      EventQueue,
    now:        SimTime,
    /// Fires never move, so their cells are indexed once.
    fire_cells: FxHashMap<CellPos, FireId>,
    initial:    Initial,
}

impl Sim {
    pub(crate) fn new(config: SimConfig, map: TerrainMap, robots: Vec<Robot>, fires: Vec<Fire>) -> Self {
        let mut fire_cells = FxHashMap::default();
        for f in &fires {
            fire_cells.entry(f.position()).or_insert(f.id());
        }
        let initial = Initial {
            robots:      robots.clone(),
            intensities: fires.iter().map(Fire::intensity).collect(),
            queue:       None,
        };
        info!(
            rows   = map.rows(),
            cols   = map.cols(),
            robots = robots.len(),
            fires  = fires.len(),
            "simulation built"
        );
        Self {
            now: config.start_time,
            config,
            map,
            robots,
            fires,
            queue: EventQueue::new(),
            fire_cells,
            initial,
        }
    }

    // ── Read-only views ───────────────────────────────────────────────────

    #[inline] pub fn config(&self) -> &SimConfig { &self.config }
    #[inline] pub fn map(&self) -> &TerrainMap { &self.map }
    #[inline] pub fn robots(&self) -> &[Robot] { &self.robots }
    #[inline] pub fn fires(&self) -> &[Fire] { &self.fires }
    #[inline] pub fn current_time(&self) -> SimTime { self.now }

    #[inline]
    pub fn water_cells(&self) -> &[CellPos] {
        self.map.water_cells()
    }

    pub fn robot(&self, id: RobotId) -> Option<&Robot> {
        self.robots.get(id.index())
    }

    pub fn fire(&self, id: FireId) -> Option<&Fire> {
        self.fires.get(id.index())
    }

    /// The first fire (by id) on `pos`.
    pub fn fire_at(&self, pos: CellPos) -> Option<&Fire> {
        self.fire_cells.get(&pos).and_then(|id| self.fire(*id))
    }

    /// The first robot (by id) currently on `pos`.
    pub fn robot_at(&self, pos: CellPos) -> Option<&Robot> {
        self.robots.iter().find(|r| r.position() == pos)
    }

    /// Pending events in execution order.
    pub fn pending_events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.queue.iter()
    }

    /// `true` once no events are pending.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            time:   self.now,
            robots: self.robots.iter().map(RobotView::from).collect(),
            fires:  self.fires.iter().map(FireView::from).collect(),
        }
    }

    // ── Planning ──────────────────────────────────────────────────────────

    /// Run `strategy` from the current clock and enqueue every event it
    /// emits.
    ///
    /// Planning starts from the robots' current positions and reservoirs, so
    /// it is only valid once every earlier event has been played back.
    ///
    /// # Errors
    /// [`SimError::DispatchPending`] if any event is still queued.
    pub fn dispatch<S, P>(&mut self, strategy: &S, planner: &P) -> SimResult<DispatchPlan>
    where
        S: Strategy + ?Sized,
        P: Planner,
    {
        if !self.queue.is_empty() {
            return Err(SimError::DispatchPending(self.queue.len()));
        }
        let plan = strategy.plan(
            &self.map,
            &self.robots,
            &self.fires,
            self.map.water_cells(),
            self.now,
            planner,
        );
        for (time, kind) in &plan.events {
            self.queue.schedule(*time, *kind);
        }
        Ok(plan)
    }

    /// Enqueue a single event.
    pub fn schedule(&mut self, time: SimTime, kind: EventKind) -> EventSeq {
        self.queue.schedule(time, kind)
    }

    // ── Playback ──────────────────────────────────────────────────────────

    /// Execute every event due at or before the clock, then move the clock
    /// to the next pending due time (left unchanged when none remain).
    /// Returns the number of events executed.
    ///
    /// # Panics
    /// On an event that breaks a world invariant: a move off the map or onto
    /// terrain the robot cannot cross, or an unknown robot or fire id.
    pub fn advance_to_next_batch(&mut self) -> usize {
        self.advance_observed(&mut NoopObserver)
    }

    /// Alias of [`advance_to_next_batch`](Self::advance_to_next_batch).
    pub fn advance_one_step(&mut self) -> usize {
        self.advance_to_next_batch()
    }

    pub fn advance_observed<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        if self.initial.queue.is_none() {
            self.initial.queue = Some(self.queue.snapshot());
        }

        let mut executed = 0;
        while let Some(event) = self.queue.pop_due(self.now) {
            self.execute(&event);
            observer.on_event(event.time(), &event);
            executed += 1;
        }
        if let Some(next) = self.queue.peek_time() {
            self.now = self.now.max(next);
        }

        debug!(time = %self.now, executed, pending = self.queue.len(), "batch done");
        observer.on_batch_end(self.now, executed);
        executed
    }

    /// Play back until no events remain.  Returns the number of events
    /// executed.
    ///
    /// # Errors
    /// [`SimError::BatchLimit`] if events are still pending after
    /// `config.max_batches` batches.
    pub fn run_to_completion(&mut self) -> SimResult<usize> {
        self.run_observed(&mut NoopObserver)
    }

    pub fn run_observed<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        let mut total = 0;
        let mut batches = 0;
        while !self.is_finished() {
            if batches == self.config.max_batches {
                return Err(SimError::BatchLimit(batches));
            }
            total += self.advance_observed(observer);
            batches += 1;
        }
        info!(time = %self.now, events = total, batches, "playback finished");
        Ok(total)
    }

    /// Reset robots, fires, pending events and the clock to how they were
    /// before the first advance, so that playback can be repeated.
    pub fn restart(&mut self) {
        self.restart_observed(&mut NoopObserver);
    }

    pub fn restart_observed<O: SimObserver>(&mut self, observer: &mut O) {
        for (robot, saved) in self.robots.iter_mut().zip(&self.initial.robots) {
            robot.restore(saved);
        }
        for (fire, &intensity) in self.fires.iter_mut().zip(&self.initial.intensities) {
            fire.restore(intensity);
        }
        if let Some(queue) = &self.initial.queue {
            self.queue = queue.clone();
        }
        self.now = self.config.start_time;

        info!(pending = self.queue.len(), "simulation restarted");
        observer.on_restart();
    }

    // ── Event execution ───────────────────────────────────────────────────

    fn execute(&mut self, event: &Event) {
        match *event.kind() {
            EventKind::Move { robot, direction } => {
                let from = self.robot_mut(robot).position();
                let to = match self.map.neighbor(from, direction) {
                    Ok(to) => to,
                    Err(e) => panic!("{event}: {e}"),
                };
                let terrain = self.map.terrain(to);
                let r = self.robot_mut(robot);
                if !r.can_traverse(terrain) {
                    panic!("{event}: {} robot cannot enter {terrain} at {to}", r.kind());
                }
                r.enter(to, terrain);
            }

            EventKind::Refill { robot, volume } => {
                if let Err(e) = self.robot_mut(robot).refill(i64::from(volume)) {
                    panic!("{event}: {e}");
                }
            }

            EventKind::Intervene { robot, fire } => {
                let intensity = self.fire_mut(fire, event).intensity();
                let r = self.robot_mut(robot);
                let used = r.reservoir().min(intensity);
                r.discharge(used);
                let left = self.fire_mut(fire, event).extinguish(used);
                if left == 0 && used > 0 {
                    debug!(%fire, time = %event.time(), "fire extinguished");
                }
            }
        }
    }

    fn robot_mut(&mut self, id: RobotId) -> &mut Robot {
        let count = self.robots.len();
        match self.robots.get_mut(id.index()) {
            Some(r) => r,
            None => panic!("event refers to {id}, but only {count} robots exist"),
        }
    }

    fn fire_mut(&mut self, id: FireId, event: &Event) -> &mut Fire {
        let count = self.fires.len();
        match self.fires.get_mut(id.index()) {
            Some(f) => f,
            None => panic!("{event}: unknown {id}, only {count} fires exist"),
        }
    }
}
