//! Plain data row types written by output backends.

use ts_core::Tick;
use ts_fleet::Vehicle;

/// One vehicle as published at a given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshotRow {
    pub tick:       u64,
    pub unix_ms:    i64,
    pub vehicle_id: u32,
    pub label:      String,
    pub route_id:   u32,
    pub lat:        f64,
    pub lon:        f64,
    pub progress:   f64,
    /// `+1` forward, `-1` backward.
    pub direction:  i8,
    pub speed_kmh:  f64,
    /// Crowd label, e.g. `"Moderate"`.
    pub crowd:      &'static str,
}

impl VehicleSnapshotRow {
    pub fn from_vehicle(tick: Tick, unix_ms: i64, v: &Vehicle) -> Self {
        Self {
            tick:       tick.0,
            unix_ms,
            vehicle_id: v.id.0,
            label:      v.label.clone(),
            route_id:   v.route.0,
            lat:        v.position.lat,
            lon:        v.position.lon,
            progress:   v.progress,
            direction:  v.direction.sign() as i8,
            speed_kmh:  v.speed_kmh,
            crowd:      v.crowd.label(),
        }
    }
}

/// Per-tick bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:              u64,
    pub unix_ms:           i64,
    pub vehicles_advanced: u64,
}
