//! Simulation observer trait — how ticks reach the rendering layer and
//! output writers.

use ts_core::Tick;
use ts_fleet::Vehicle;

/// Callbacks invoked around every tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, _now_unix_ms: i64, advanced: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: moved {advanced} vehicles");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any vehicle moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once the whole fleet has been updated.  `now_unix_ms` is the
    /// time the tick was stamped with; `advanced` is the number of vehicles
    /// moved (the fleet size).
    fn on_tick_end(&mut self, _tick: Tick, _now_unix_ms: i64, _advanced: usize) {}

    /// Called every `config.output_interval_ticks` ticks with the updated
    /// fleet — the "publish to the renderer" hook.
    ///
    /// `now_unix_ms` is the wall-clock time the tick advanced to.
    fn on_snapshot(&mut self, _tick: Tick, _now_unix_ms: i64, _vehicles: &[Vehicle]) {}

    /// Called once when a batch run finishes or the scheduler stops.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
