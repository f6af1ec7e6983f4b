//! Read-only snapshots of the world for rendering.

use ff_agent::{Fire, Robot, RobotKind};
use ff_core::{CellPos, FireId, RobotId, SimTime};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotView {
    pub id:        RobotId,
    pub kind:      RobotKind,
    pub position:  CellPos,
    pub speed_kmh: f64,
    pub reservoir: u32,
}

impl From<&Robot> for RobotView {
    fn from(r: &Robot) -> Self {
        Self {
            id:        r.id(),
            kind:      r.kind(),
            position:  r.position(),
            speed_kmh: r.speed_kmh(),
            reservoir: r.reservoir(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FireView {
    pub id:        FireId,
    pub position:  CellPos,
    pub intensity: u32,
}

impl From<&Fire> for FireView {
    fn from(f: &Fire) -> Self {
        Self { id: f.id(), position: f.position(), intensity: f.intensity() }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSnapshot {
    pub time:   SimTime,
    pub robots: Vec<RobotView>,
    pub fires:  Vec<FireView>,
}

impl WorldSnapshot {
    /// Fires still burning.
    pub fn burning(&self) -> impl Iterator<Item = &FireView> + '_ {
        self.fires.iter().filter(|f| f.intensity > 0)
    }
}
