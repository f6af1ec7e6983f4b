//! Simulation observer trait for rendering and data collection.

use ff_core::SimTime;
use ff_schedule::Event;

/// Callbacks invoked while the clock plays events back.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — event printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_event(&mut self, _time: SimTime, event: &Event) {
///         println!("{event}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called right after `event` has been applied to the world.
    fn on_event(&mut self, _time: SimTime, _event: &Event) {}

    /// Called after every batch, with the clock already advanced to the next
    /// due time.  `executed` is the number of events applied in the batch.
    fn on_batch_end(&mut self, _time: SimTime, _executed: usize) {}

    /// Called once the world has been reset by a restart.
    fn on_restart(&mut self) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
