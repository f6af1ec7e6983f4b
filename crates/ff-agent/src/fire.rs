//! Fire state.

use ff_core::{CellPos, FireId};

/// A fire burning on one cell.  Intensity is measured in litres of water
/// needed to put it out.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fire {
    id:        FireId,
    position:  CellPos,
    intensity: u32,
}

impl Fire {
    pub fn new(id: FireId, position: CellPos, intensity: u32) -> Self {
        Self { id, position, intensity }
    }

    #[inline] pub fn id(&self) -> FireId { self.id }
    #[inline] pub fn position(&self) -> CellPos { self.position }
    #[inline] pub fn intensity(&self) -> u32 { self.intensity }

    #[inline]
    pub fn is_extinguished(&self) -> bool {
        self.intensity == 0
    }

    /// Reduce intensity by `volume`, never below zero.  Returns the new
    /// intensity.
    pub fn extinguish(&mut self, volume: u32) -> u32 {
        self.intensity = self.intensity.saturating_sub(volume);
        self.intensity
    }

    /// Reset intensity.  Only the restart path calls this.
    pub fn restore(&mut self, intensity: u32) {
        self.intensity = intensity;
    }
}
