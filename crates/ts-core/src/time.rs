//! Simulation time model.
//!
//! # Design
//!
//! Time advances only when the scheduler ticks.  Each tick carries the
//! wall-clock interval it represents, and `SimClock` accumulates those
//! intervals:
//!
//!   now_unix_ms = start_unix_ms + Σ elapsed_ms
//!
//! There is no simulated time independent of ticks: a paused simulation's
//! clock stands still.  Keeping the accumulated value in integer
//! milliseconds makes timestamps exact and reproducible in tests.

use std::fmt;

use crate::{TsError, TsResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the tick count and the wall-clock time the ticks add up to.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Unix timestamp (milliseconds since epoch) of tick 0.
    pub start_unix_ms: i64,
    /// The current tick — advanced by `SimClock::advance()` each tick.
    pub current_tick: Tick,
    /// Milliseconds accumulated over all ticks so far.
    pub elapsed_ms: u64,
    /// Wall-clock time (Unix ms) the latest tick was stamped with.
    pub now_unix_ms: i64,
}

impl SimClock {
    pub fn new(start_unix_ms: i64) -> Self {
        Self {
            start_unix_ms,
            current_tick: Tick::ZERO,
            elapsed_ms: 0,
            now_unix_ms: start_unix_ms,
        }
    }

    /// Advance the clock by one tick covering `elapsed_ms`.
    ///
    /// The tick is stamped `start_unix_ms + elapsed_ms`: simulated time only,
    /// as in batch runs and tests.
    #[inline]
    pub fn advance(&mut self, elapsed_ms: u64) {
        let now = self.start_unix_ms + (self.elapsed_ms + elapsed_ms) as i64;
        self.advance_to(elapsed_ms, now);
    }

    /// Advance by one tick covering `elapsed_ms`, stamped with the real
    /// wall-clock time `now_unix_ms`.
    #[inline]
    pub fn advance_to(&mut self, elapsed_ms: u64, now_unix_ms: i64) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed_ms += elapsed_ms;
        self.now_unix_ms = now_unix_ms;
    }

    /// Unix timestamp (ms) of the latest tick.
    #[inline]
    pub fn current_unix_ms(&self) -> i64 {
        self.now_unix_ms
    }

    /// Break elapsed time into (hours, minutes, seconds) since tick 0.
    pub fn elapsed_hms(&self) -> (u64, u32, u32) {
        let total_secs = self.elapsed_ms / 1_000;
        let hours = total_secs / 3_600;
        let minutes = ((total_secs % 3_600) / 60) as u32;
        let seconds = (total_secs % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "{} (+{}:{:02}:{:02})", self.current_tick, h, m, s)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the application crate (feature
/// `serde`; missing fields take their [`Default`] values) and passed to the
/// simulation builder, which calls [`SimConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Unix timestamp (ms) for tick 0.  Vehicles' initial `last_update_ms`.
    pub start_unix_ms: i64,

    /// Wall-clock milliseconds between ticks.  Default: 1000.
    pub tick_interval_ms: u64,

    /// Ticks to run in batch mode (`Simulation::run`).  Ignored by the
    /// real-time scheduler, which runs until stopped.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical fleets.
    pub seed: u64,

    /// Vehicles created per route at startup.  Default: 2.
    pub vehicles_per_route: usize,

    /// Inclusive range initial speeds are drawn from, km/h.  Default: 18–30.
    pub speed_range_kmh: (f64, f64),

    /// Per-tick probability that a vehicle's crowd level moves by ±1.
    /// Default: 0.1.
    pub crowd_walk_probability: f64,

    /// Fixed length (metres) used to turn distance travelled into progress.
    /// Deliberately independent of each route's real length.  Default: 5000.
    pub reference_route_length_m: f64,

    /// Scale initial progress by 1.0 / 0.6 on even / odd routes so the two
    /// kinds of route do not start in lock-step.  Default: `true`.
    pub alternate_spacing: bool,

    /// Publish a fleet snapshot every N ticks.  0 disables snapshots.
    /// Default: 1.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_unix_ms:            0,
            tick_interval_ms:         1_000,
            total_ticks:              0,
            seed:                     0,
            vehicles_per_route:       2,
            speed_range_kmh:          (18.0, 30.0),
            crowd_walk_probability:   0.1,
            reference_route_length_m: 5_000.0,
            alternate_spacing:        true,
            output_interval_ticks:    1,
        }
    }
}

impl SimConfig {
    /// The tick at which a batch run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_unix_ms)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> TsResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(TsError::Config("tick_interval_ms must be positive".into()));
        }
        if self.vehicles_per_route == 0 {
            return Err(TsError::Config("vehicles_per_route must be at least 1".into()));
        }
        let (lo, hi) = self.speed_range_kmh;
        if !(lo.is_finite() && hi.is_finite()) || lo <= 0.0 || hi < lo {
            return Err(TsError::Config(format!(
                "speed_range_kmh must satisfy 0 < lo <= hi, got ({lo}, {hi})"
            )));
        }
        if !(0.0..=1.0).contains(&self.crowd_walk_probability) {
            return Err(TsError::Config(format!(
                "crowd_walk_probability must be in [0, 1], got {}",
                self.crowd_walk_probability
            )));
        }
        if !(self.reference_route_length_m.is_finite() && self.reference_route_length_m > 0.0) {
            return Err(TsError::Config(format!(
                "reference_route_length_m must be positive, got {}",
                self.reference_route_length_m
            )));
        }
        Ok(())
    }
}
