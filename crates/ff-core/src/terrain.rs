//! Terrain kinds shared by the map, the robot rule table and the planner.

use std::str::FromStr;

use crate::FfError;

/// The nature of one map cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Water,
    Forest,
    Rock,
    /// Clear ground.  The default for freshly allocated maps.
    #[default]
    Open,
    Habitat,
}

impl Terrain {
    pub const ALL: [Terrain; 5] = [
        Terrain::Water,
        Terrain::Forest,
        Terrain::Rock,
        Terrain::Open,
        Terrain::Habitat,
    ];

    #[inline]
    pub fn is_water(self) -> bool {
        matches!(self, Terrain::Water)
    }

    /// Lower-case label, also accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Terrain::Water   => "water",
            Terrain::Forest  => "forest",
            Terrain::Rock    => "rock",
            Terrain::Open    => "open",
            Terrain::Habitat => "habitat",
        }
    }

    /// Single-character glyph used by compact text maps.
    pub fn as_char(self) -> char {
        match self {
            Terrain::Water   => 'W',
            Terrain::Forest  => 'F',
            Terrain::Rock    => 'R',
            Terrain::Open    => '.',
            Terrain::Habitat => 'H',
        }
    }

    /// Inverse of [`as_char`](Self::as_char).
    pub fn from_char(c: char) -> Option<Terrain> {
        match c {
            'W' => Some(Terrain::Water),
            'F' => Some(Terrain::Forest),
            'R' => Some(Terrain::Rock),
            '.' => Some(Terrain::Open),
            'H' => Some(Terrain::Habitat),
            _ => None,
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Terrain {
    type Err = FfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Terrain::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| FfError::UnknownTerrain(s.to_owned()))
    }
}
