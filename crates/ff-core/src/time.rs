//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing count of whole simulated seconds.
//! Event timestamps, planning projections and the playback clock all use
//! `SimTime`, so the dispatcher's projected finish times and the clock's
//! actual execution times compare exactly (no floating-point drift).
//!
//! Durations come out of the planner and the robot rule table as `f64`
//! seconds; [`SimTime::after_secs`] rounds them up so no event is ever
//! scheduled before the work it stands for could have finished.

use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp in seconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Return the time `n` seconds after `self`, saturating at the end of
    /// representable time.
    #[inline]
    pub fn offset(self, n: u64) -> SimTime {
        SimTime(self.0.saturating_add(n))
    }

    /// Seconds elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0 - earlier.0
    }

    /// The time `secs` after `self`, rounded up to the next whole second.
    ///
    /// Negative, NaN and infinite inputs are treated as zero; callers only
    /// pass durations of reachable, finite work.
    #[inline]
    pub fn after_secs(self, secs: f64) -> SimTime {
        self.offset(whole_secs(secs))
    }

    /// Like [`after_secs`](Self::after_secs), but `None` when `secs` is not
    /// finite or the rounded result does not fit in a `SimTime`.
    #[inline]
    pub fn checked_after_secs(self, secs: f64) -> Option<SimTime> {
        if !secs.is_finite() || secs - ROUNDING_SLACK_SECS >= MAX_WHOLE_SECS {
            return None;
        }
        self.0.checked_add(whole_secs(secs)).map(SimTime)
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64
    }
}

/// Durations within this many seconds below a whole second round down to it.
/// Absorbs representation error in products like `0.15 * 2000.0`.
pub const ROUNDING_SLACK_SECS: f64 = 1e-9;

/// `u64::MAX + 1` as a float; durations at or above it do not round to a
/// `u64`.
const MAX_WHOLE_SECS: f64 = 18_446_744_073_709_551_616.0;

/// Round a duration up to whole seconds (`0` for non-finite or negative).
#[inline]
pub fn whole_secs(secs: f64) -> u64 {
    if secs.is_finite() && secs > 0.0 {
        (secs - ROUNDING_SLACK_SECS).ceil().max(0.0) as u64
    } else {
        0
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        self.offset(rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.0 / 3_600;
        let m = (self.0 % 3_600) / 60;
        let s = self.0 % 60;
        write!(f, "t={}s ({}:{:02}:{:02})", self.0, h, m, s)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically filled in by the application from its scenario source and
/// passed to the simulation builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Clock value at which dispatch planning and playback start.
    pub start_time: SimTime,

    /// Upper bound on batches executed by `run_to_completion`.  Playback of
    /// a finite plan always terminates well before this; the bound only
    /// guards against callers that keep scheduling from an observer.
    pub max_batches: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_time:  SimTime::ZERO,
            max_batches: 1_000_000,
        }
    }
}
