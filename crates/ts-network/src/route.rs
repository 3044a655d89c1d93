//! Static route and stop records.

use ts_core::{Coordinate, RouteId, StopId};

use crate::RoutePath;

/// A named place where vehicles pick up passengers.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub id:       StopId,
    /// Configuration code, e.g. `"S3"`.  Unique across the network.
    pub code:     String,
    pub name:     String,
    pub position: Coordinate,
}

/// A fixed line that vehicles shuttle back and forth along.
///
/// Created once when the network is built and shared read-only by every
/// vehicle that references it by `id`.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub id:        RouteId,
    /// Configuration code, e.g. `"R1"`.  Unique across the network.
    pub code:      String,
    pub name:      String,
    /// Display colour (hex or CSS name) for the map renderer.
    pub color:     String,
    /// Path geometry; insertion order is the direction of increasing progress.
    pub path:      RoutePath,
    /// Stops served, in order along the path.
    pub stops:     Vec<StopId>,
    /// Base fare, carried for downstream consumers.  Unused by the engine.
    pub base_fare: f64,
}

impl Route {
    /// `true` if this route lists `stop` among its stops.
    #[inline]
    pub fn serves(&self, stop: StopId) -> bool {
        self.stops.contains(&stop)
    }
}
