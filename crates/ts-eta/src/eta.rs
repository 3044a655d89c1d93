//! Single-vehicle arrival estimate.

use std::fmt;

use ts_fleet::Vehicle;
use ts_network::{Route, Stop};

/// No estimate is ever shorter than this.
pub const ETA_FLOOR_SECS: u32 = 30;

/// Estimated time to arrival, in whole seconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Eta(pub u32);

impl Eta {
    /// A vehicle that is not moving never arrives.  Sorts after every real
    /// estimate.
    pub const NEVER: Eta = Eta(u32::MAX);

    #[inline]
    pub fn secs(self) -> u32 {
        self.0
    }

    /// Whole minutes, rounded down.
    ///
    /// A board that shows minutes alone and rounds to nearest reads one
    /// minute higher from 30 s past each minute; [`Display`](fmt::Display)
    /// shows the seconds remainder instead.
    #[inline]
    pub fn minutes(self) -> u32 {
        self.0 / 60
    }

    /// Seconds left over after [`minutes`](Self::minutes).
    #[inline]
    pub fn seconds_part(self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Eta::NEVER {
            return f.write_str("--");
        }
        write!(f, "{} min {:02}s", self.minutes(), self.seconds_part())
    }
}

/// Estimate how long `vehicle` (on `route`) takes to reach `stop`.
///
/// Straight-line haversine distance from the vehicle's displayed position to
/// the stop, divided by its speed, rounded to the nearest second and floored
/// at [`ETA_FLOOR_SECS`].  A proximity heuristic: it ignores the direction of
/// travel and whether the vehicle will turn back before reaching the stop.
///
/// `route` is the vehicle's route; the estimate itself does not read it.
/// Finite estimates are capped one below [`Eta::NEVER`].
pub fn eta_to_stop(vehicle: &Vehicle, _route: &Route, stop: &Stop) -> Eta {
    let speed_ms = vehicle.speed_ms();
    if speed_ms.is_nan() || speed_ms <= 0.0 {
        return Eta::NEVER;
    }
    let secs = (vehicle.position.distance_m(stop.position) / speed_ms).round();
    let secs = (secs as u32).min(Eta::NEVER.0 - 1);
    Eta(secs.max(ETA_FLOOR_SECS))
}
