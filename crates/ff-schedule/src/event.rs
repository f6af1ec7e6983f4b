//! Robot events.

use std::fmt;

use ff_core::{Direction, FireId, RobotId, SimTime};

/// Insertion sequence number; breaks ties between events due at the same time.
pub type EventSeq = u64;

/// What happens when an event fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// The robot arrives in the neighbouring cell in `direction`.
    Move { robot: RobotId, direction: Direction },
    /// The robot has finished drawing `volume` litres.
    Refill { robot: RobotId, volume: u32 },
    /// The robot has finished pouring water on `fire`.
    Intervene { robot: RobotId, fire: FireId },
}

impl EventKind {
    /// The robot this event acts on.
    pub fn robot(&self) -> RobotId {
        match *self {
            EventKind::Move { robot, .. }
            | EventKind::Refill { robot, .. }
            | EventKind::Intervene { robot, .. } => robot,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Move { robot, direction } => write!(f, "{robot} moves {direction}"),
            EventKind::Refill { robot, volume }  => write!(f, "{robot} refills {volume} L"),
            EventKind::Intervene { robot, fire } => write!(f, "{robot} intervenes on {fire}"),
        }
    }
}

/// A scheduled, immutable event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    time: SimTime,
    seq:  EventSeq,
    kind: EventKind,
}

impl Event {
    pub fn new(time: SimTime, seq: EventSeq, kind: EventKind) -> Self {
        Self { time, seq, kind }
    }

    #[inline] pub fn time(&self) -> SimTime { self.time }
    #[inline] pub fn seq(&self) -> EventSeq { self.seq }
    #[inline] pub fn kind(&self) -> &EventKind { &self.kind }

    /// Queue ordering key.
    #[inline]
    pub fn key(&self) -> (SimTime, EventSeq) {
        (self.time, self.seq)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} #{}] {}", self.time, self.seq, self.kind)
    }
}
