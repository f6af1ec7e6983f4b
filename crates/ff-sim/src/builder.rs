//! Fluent builder for constructing a [`Sim`].

use ff_agent::{Fire, Robot, RobotKind};
use ff_core::{CellPos, FireId, RobotId, SimConfig};
use ff_map::{MapBuilder, TerrainMap};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`TerrainMap`] — via [`new`](Self::new) or [`from_rows`](Self::from_rows)
///
/// # Optional inputs (have defaults)
///
/// | Method                          | Default                 |
/// |---------------------------------|-------------------------|
/// | `.robot(kind, pos)`             | no robots               |
/// | `.robot_with_speed(k, p, kmh)`  | kind's default speed    |
/// | `.fire(pos, intensity)`         | no fires                |
/// | `.config(c)`                    | `SimConfig::default()`  |
///
/// Robots and fires get ids in the order they are added.
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(map)
///     .robot(RobotKind::Aerial, CellPos::new(0, 0))
///     .robot_with_speed(RobotKind::Tracked, CellPos::new(4, 2), 75.0)
///     .fire(CellPos::new(7, 7), 3_000)
///     .build()?;
/// ```
pub struct SimBuilder {
    map:    TerrainMap,
    robots: Vec<(RobotKind, CellPos, Option<f64>)>,
    fires:  Vec<(CellPos, u32)>,
    config: SimConfig,
}

impl SimBuilder {
    pub fn new(map: TerrainMap) -> Self {
        Self {
            map,
            robots: Vec::new(),
            fires:  Vec::new(),
            config: SimConfig::default(),
        }
    }

    /// Start from a compact text map (see [`MapBuilder::from_rows`]).
    pub fn from_rows(rows: &[&str], cell_size_m: f64) -> SimResult<Self> {
        let map = MapBuilder::from_rows(rows, cell_size_m)?.build()?;
        Ok(Self::new(map))
    }

    pub fn robot(mut self, kind: RobotKind, pos: CellPos) -> Self {
        self.robots.push((kind, pos, None));
        self
    }

    /// Add a robot with an explicit base speed in km/h.  The speed is
    /// checked against the kind's cap in [`build`](Self::build).
    pub fn robot_with_speed(mut self, kind: RobotKind, pos: CellPos, speed_kmh: f64) -> Self {
        self.robots.push((kind, pos, Some(speed_kmh)));
        self
    }

    pub fn fire(mut self, pos: CellPos, intensity: u32) -> Self {
        self.fires.push((pos, intensity));
        self
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate inputs and return a [`Sim`] with the clock at
    /// `config.start_time` and an empty event queue.
    pub fn build(self) -> SimResult<Sim> {
        if self.config.max_batches == 0 {
            return Err(SimError::Config("max_batches must be at least 1".into()));
        }

        // ── Robots ────────────────────────────────────────────────────────
        let mut robots = Vec::with_capacity(self.robots.len());
        for (i, (kind, pos, speed)) in self.robots.into_iter().enumerate() {
            let terrain = self
                .map
                .cell_at(pos)
                .ok_or(SimError::OutOfBounds { pos, what: "robot" })?;
            if !kind.can_traverse(terrain) {
                return Err(SimError::UntraversableStart { kind, pos, terrain });
            }
            let id = RobotId::try_from(i)
                .map_err(|_| SimError::Config(format!("robot #{i} exceeds the id range")))?;
            let mut robot = Robot::new(id, kind, pos, terrain);
            if let Some(kmh) = speed {
                robot = robot.with_base_speed(kmh)?;
            }
            robots.push(robot);
        }

        // ── Fires ─────────────────────────────────────────────────────────
        let mut fires = Vec::with_capacity(self.fires.len());
        for (i, (pos, intensity)) in self.fires.into_iter().enumerate() {
            if !self.map.contains(pos) {
                return Err(SimError::OutOfBounds { pos, what: "fire" });
            }
            let id = FireId::try_from(i)
                .map_err(|_| SimError::Config(format!("fire #{i} exceeds the id range")))?;
            fires.push(Fire::new(id, pos, intensity));
        }

        Ok(Sim::new(self.config, self.map, robots, fires))
    }
}
