//! The closed set of robot kinds and their capability rule table.
//!
//! Every per-kind behaviour (what a robot can cross, how fast, how long it
//! takes to fill up and to put water on a fire) is answered by one `match`
//! on [`RobotKind`].  Adding a kind means adding one arm to each method;
//! the compiler points at every place that needs it.

use std::fmt;
use std::str::FromStr;

use ff_core::{FfError, Terrain};

/// Reservoir capacity used for kinds that never run dry.
pub const UNLIMITED_CAPACITY: u32 = u32::MAX;

/// Legged robots climb rock at this speed regardless of their base speed.
const LEGGED_ROCK_KMH: f64 = 10.0;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RobotKind {
    /// Drone.  Crosses every terrain at full speed.
    Aerial,
    Tracked,
    Wheeled,
    /// Walker with an effectively unlimited reservoir.
    Legged,
}

impl RobotKind {
    pub const ALL: [RobotKind; 4] =
        [RobotKind::Aerial, RobotKind::Tracked, RobotKind::Wheeled, RobotKind::Legged];

    /// Reservoir capacity in litres.
    pub fn max_reservoir(self) -> u32 {
        match self {
            RobotKind::Aerial  => 10_000,
            RobotKind::Tracked => 2_000,
            RobotKind::Wheeled => 5_000,
            RobotKind::Legged  => UNLIMITED_CAPACITY,
        }
    }

    #[inline]
    pub fn has_unlimited_reservoir(self) -> bool {
        self.max_reservoir() == UNLIMITED_CAPACITY
    }

    /// Base speed used when a scenario does not specify one, km/h.
    pub fn default_speed_kmh(self) -> f64 {
        match self {
            RobotKind::Aerial  => 100.0,
            RobotKind::Tracked => 60.0,
            RobotKind::Wheeled => 80.0,
            RobotKind::Legged  => 30.0,
        }
    }

    /// Largest base speed a scenario may set, or `None` when uncapped.
    pub fn max_base_speed_kmh(self) -> Option<f64> {
        match self {
            RobotKind::Aerial  => Some(150.0),
            RobotKind::Tracked => Some(80.0),
            RobotKind::Wheeled | RobotKind::Legged => None,
        }
    }

    pub fn can_traverse(self, terrain: Terrain) -> bool {
        match self {
            RobotKind::Aerial  => true,
            RobotKind::Tracked => !matches!(terrain, Terrain::Water | Terrain::Rock),
            RobotKind::Wheeled => matches!(terrain, Terrain::Open | Terrain::Habitat),
            RobotKind::Legged  => !terrain.is_water(),
        }
    }

    /// Speed on `terrain` for a robot of this kind with base speed
    /// `base_kmh`.  Zero where the terrain cannot be crossed.
    pub fn speed_on(self, terrain: Terrain, base_kmh: f64) -> f64 {
        if !self.can_traverse(terrain) {
            return 0.0;
        }
        match (self, terrain) {
            (RobotKind::Tracked, Terrain::Forest)  => base_kmh / 2.0,
            (RobotKind::Wheeled, Terrain::Habitat) => base_kmh / 2.0,
            (RobotKind::Legged, Terrain::Rock)     => LEGGED_ROCK_KMH,
            _ => base_kmh,
        }
    }

    /// Seconds needed per litre drawn from a water source.
    pub fn fill_rate(self) -> f64 {
        match self {
            RobotKind::Aerial  => 0.18,
            RobotKind::Tracked => 0.15,
            RobotKind::Wheeled => 0.12,
            RobotKind::Legged  => 0.0,
        }
    }

    /// Seconds needed per litre poured on a fire.
    pub fn intervention_rate(self) -> f64 {
        match self {
            RobotKind::Aerial  => 0.003,
            RobotKind::Tracked => 0.08,
            RobotKind::Wheeled => 0.05,
            RobotKind::Legged  => 0.1,
        }
    }

    /// Seconds to draw `volume` litres.
    #[inline]
    pub fn fill_time(self, volume: u32) -> f64 {
        self.fill_rate() * volume as f64
    }

    /// Seconds to pour `volume` litres onto a fire.
    #[inline]
    pub fn intervention_time(self, volume: u32) -> f64 {
        self.intervention_rate() * volume as f64
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RobotKind::Aerial  => "aerial",
            RobotKind::Tracked => "tracked",
            RobotKind::Wheeled => "wheeled",
            RobotKind::Legged  => "legged",
        }
    }
}

impl fmt::Display for RobotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RobotKind {
    type Err = FfError;

    /// Accepts the lower-case kind names plus `drone` for [`RobotKind::Aerial`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aerial" | "drone" => Ok(RobotKind::Aerial),
            "tracked"          => Ok(RobotKind::Tracked),
            "wheeled"          => Ok(RobotKind::Wheeled),
            "legged"           => Ok(RobotKind::Legged),
            _ => Err(FfError::UnknownRobotKind(s.to_owned())),
        }
    }
}
