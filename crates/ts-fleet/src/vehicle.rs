//! The live state of one simulated vehicle.

use ts_core::{Coordinate, CrowdLevel, Direction, RouteId, VehicleId};

/// One simulated bus.
///
/// `progress` and `direction` are the only authoritative position state.
/// `position` is recomputed from them by the route path after every tick and
/// must never be read back as a source of truth.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub id:             VehicleId,
    /// Display code, `"<route code>-B<n>"`, e.g. `"R1-B2"`.
    pub label:          String,
    pub route:          RouteId,
    /// Last derived map coordinate.
    pub position:       Coordinate,
    pub speed_kmh:      f64,
    pub crowd:          CrowdLevel,
    /// Wall-clock time (Unix ms) of the tick that last updated this vehicle.
    pub last_update_ms: i64,
    pub direction:      Direction,
    /// Fraction of the route's arc length, always in `[0, 1]`.
    pub progress:       f64,
}

impl Vehicle {
    /// Speed in metres per second.
    #[inline]
    pub fn speed_ms(&self) -> f64 {
        self.speed_kmh * 1_000.0 / 3_600.0
    }
}
