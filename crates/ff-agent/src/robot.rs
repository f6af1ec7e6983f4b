//! Mutable state of one robot.

use ff_core::{CellPos, RobotId, Terrain};

use crate::{AgentError, AgentResult, RobotKind};

/// One robot: where it stands, how fast it goes, how much water it carries.
///
/// `speed_kmh` always reflects the terrain under the robot; it is refreshed
/// by [`enter`](Self::enter) and [`set_speed_on`](Self::set_speed_on).
/// Planning never reads it, see [`speed_on`](Self::speed_on).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Robot {
    id:             RobotId,
    kind:           RobotKind,
    position:       CellPos,
    base_speed_kmh: f64,
    speed_kmh:      f64,
    /// Terrain under the robot; the source of `speed_kmh`.
    ground:         Terrain,
    /// Litres on board, `0..=kind.max_reservoir()`.
    reservoir:      u32,
}

impl Robot {
    /// A robot at `position` with its kind's default speed and a full
    /// reservoir.  `terrain` is the terrain at `position`.
    pub fn new(id: RobotId, kind: RobotKind, position: CellPos, terrain: Terrain) -> Self {
        let base = kind.default_speed_kmh();
        Self {
            id,
            kind,
            position,
            base_speed_kmh: base,
            speed_kmh:      kind.speed_on(terrain, base),
            ground:         terrain,
            reservoir:      kind.max_reservoir(),
        }
    }

    /// Override the base speed and re-derive the current speed.
    ///
    /// # Errors
    /// [`AgentError::InvalidSpeed`] for negative or non-finite speeds, or
    /// speeds above the kind's cap.
    pub fn with_base_speed(mut self, speed_kmh: f64) -> AgentResult<Self> {
        let max = self.kind.max_base_speed_kmh();
        let too_fast = max.is_some_and(|m| speed_kmh > m);
        if !speed_kmh.is_finite() || speed_kmh < 0.0 || too_fast {
            return Err(AgentError::InvalidSpeed {
                kind:  self.kind,
                speed: speed_kmh,
                max:   max.unwrap_or(f64::INFINITY),
            });
        }
        self.base_speed_kmh = speed_kmh;
        self.set_speed_on(self.ground);
        Ok(self)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline] pub fn id(&self) -> RobotId { self.id }
    #[inline] pub fn kind(&self) -> RobotKind { self.kind }
    #[inline] pub fn position(&self) -> CellPos { self.position }
    #[inline] pub fn base_speed_kmh(&self) -> f64 { self.base_speed_kmh }
    #[inline] pub fn speed_kmh(&self) -> f64 { self.speed_kmh }
    #[inline] pub fn reservoir(&self) -> u32 { self.reservoir }
    #[inline] pub fn ground(&self) -> Terrain { self.ground }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.kind.max_reservoir()
    }

    #[inline]
    pub fn can_traverse(&self, terrain: Terrain) -> bool {
        self.kind.can_traverse(terrain)
    }

    /// Speed this robot would have on `terrain`, from its base speed alone.
    #[inline]
    pub fn speed_on(&self, terrain: Terrain) -> f64 {
        self.kind.speed_on(terrain, self.base_speed_kmh)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Move to `pos`, whose terrain is `terrain`, and re-derive the speed.
    pub fn enter(&mut self, pos: CellPos, terrain: Terrain) {
        self.position = pos;
        self.set_speed_on(terrain);
    }

    pub fn set_speed_on(&mut self, terrain: Terrain) {
        self.ground    = terrain;
        self.speed_kmh = self.speed_on(terrain);
    }

    /// Pour up to `volume` litres out.  Returns the litres actually used.
    pub fn discharge(&mut self, volume: u32) -> u32 {
        if self.kind.has_unlimited_reservoir() {
            return volume;
        }
        let used = volume.min(self.reservoir);
        self.reservoir -= used;
        used
    }

    /// Take on `volume` litres, clamped at capacity.  Returns the litres
    /// actually taken on.
    ///
    /// # Errors
    /// [`AgentError::NegativeVolume`] if `volume < 0`; the reservoir is left
    /// untouched.
    pub fn refill(&mut self, volume: i64) -> AgentResult<u32> {
        if volume < 0 {
            return Err(AgentError::NegativeVolume(volume));
        }
        let room = self.capacity() - self.reservoir;
        let added = u32::try_from(volume).unwrap_or(u32::MAX).min(room);
        self.reservoir += added;
        Ok(added)
    }

    /// Copy position, speeds and reservoir back from `saved`.
    ///
    /// # Panics
    /// Panics if `saved` belongs to a different robot.
    pub fn restore(&mut self, saved: &Robot) {
        assert_eq!(self.id, saved.id, "restoring {} from a snapshot of {}", self.id, saved.id);
        self.position       = saved.position;
        self.base_speed_kmh = saved.base_speed_kmh;
        self.speed_kmh      = saved.speed_kmh;
        self.ground         = saved.ground;
        self.reservoir      = saved.reservoir;
    }
}
