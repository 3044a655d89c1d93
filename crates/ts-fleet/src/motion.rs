//! The per-tick vehicle transition.
//!
//! [`advance`] is a pure, value-returning function of the previous vehicle,
//! the elapsed interval, the tick's timestamp, and a [`RandomSource`].  All
//! randomness (the crowd walk) goes through that source; the position math is
//! fully deterministic.

use ts_core::{CrowdLevel, Direction, RandomSource, SimConfig};

use crate::Vehicle;

/// Tunables for [`advance`], usually taken from [`SimConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    /// Metres that correspond to a progress delta of 1.0.
    ///
    /// Applied to every route regardless of its real length, so apparent
    /// speed on the map scales with route length.  Default 5000.
    pub reference_route_length_m: f64,

    /// Per-tick probability of a ±1 crowd-level step.
    pub crowd_walk_probability: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self::from(&SimConfig::default())
    }
}

impl From<&SimConfig> for MotionParams {
    fn from(config: &SimConfig) -> Self {
        Self {
            reference_route_length_m: config.reference_route_length_m,
            crowd_walk_probability:   config.crowd_walk_probability,
        }
    }
}

/// Metres covered at `speed_kmh` over `elapsed_ms`.
#[inline]
pub fn metres_moved(speed_kmh: f64, elapsed_ms: u64) -> f64 {
    speed_kmh * 1_000.0 * elapsed_ms as f64 / 3_600_000.0
}

/// Fold a raw progress value back into `[0, 1]` by bouncing off the ends.
///
/// Equivalent to reflecting repeatedly at 0 and 1 until the value is in
/// range, for overshoot of any size: the position follows a triangle wave of
/// period 2, and the direction flips once per boundary actually crossed.
/// Landing exactly on a boundary does not count as crossing it.
pub fn reflect(raw: f64, direction: Direction) -> (f64, Direction) {
    if (0.0..=1.0).contains(&raw) {
        return (raw, direction);
    }

    // Boundaries strictly passed: 1, 2, 3, … above; 0, -1, -2, … below.
    let crossings = if raw > 1.0 { raw.ceil() - 1.0 } else { (-raw).ceil() };

    let phase = raw.rem_euclid(2.0);
    let progress = if phase > 1.0 { 2.0 - phase } else { phase };

    let direction = if crossings % 2.0 == 1.0 { direction.reversed() } else { direction };
    (progress, direction)
}

/// Advance `vehicle` by `elapsed_ms` and stamp it with `now_unix_ms`.
///
/// 1. Distance travelled becomes a progress delta over the fixed reference
///    length (see [`MotionParams::reference_route_length_m`]).
/// 2. The delta is applied in the vehicle's direction and reflected back
///    into `[0, 1]`, flipping direction at each end.
/// 3. Independently, the crowd level takes a clamped ±1 step with the
///    configured probability.
///
/// Speed is unchanged.  `position` is left as it was: resolve it from the
/// route path afterwards.
pub fn advance<R: RandomSource + ?Sized>(
    vehicle:     &Vehicle,
    elapsed_ms:  u64,
    now_unix_ms: i64,
    params:      &MotionParams,
    rng:         &mut R,
) -> Vehicle {
    let delta = metres_moved(vehicle.speed_kmh, elapsed_ms) / params.reference_route_length_m;
    let raw = vehicle.progress + delta * vehicle.direction.sign();
    let (progress, direction) = reflect(raw, vehicle.direction);

    Vehicle {
        progress,
        direction,
        crowd: walk_crowd(vehicle.crowd, params.crowd_walk_probability, rng),
        last_update_ms: now_unix_ms,
        ..vehicle.clone()
    }
}

fn walk_crowd<R: RandomSource + ?Sized>(level: CrowdLevel, p: f64, rng: &mut R) -> CrowdLevel {
    if !rng.gen_bool(p) {
        return level;
    }
    if rng.gen_bool(0.5) { level.step(1) } else { level.step(-1) }
}
