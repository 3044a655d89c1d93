//! The route network and its builder.
//!
//! # Data layout
//!
//! Routes and stops live in two flat tables indexed by `RouteId` and
//! `StopId`.  A stop served by several routes appears once in the stop table
//! and is referenced by id from each route's `stops` list; routes that share
//! a stop declare it with the same code and position.
//!
//! # Spatial index
//!
//! An R-tree over stop positions answers "which stop did the user tap?" and
//! "which stops are within walking distance?" (see [`StopIndex`]).

use std::collections::HashMap;

use ts_core::{Coordinate, RouteId, StopId};

use crate::{NetworkError, NetworkResult, Route, RoutePath, Stop, StopIndex};

// ── RouteNetwork ──────────────────────────────────────────────────────────────

/// The static route set.  Read-only once built; construct with
/// [`RouteNetworkBuilder`] or the JSON loader.
pub struct RouteNetwork {
    routes:     Vec<Route>,
    stops:      Vec<Stop>,
    stop_index: StopIndex,
}

impl RouteNetwork {
    /// Construct an empty network with no routes or stops.
    pub fn empty() -> Self {
        Self {
            routes:     Vec::new(),
            stops:      Vec::new(),
            stop_index: StopIndex::build(&[]),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    // ── Routes ────────────────────────────────────────────────────────────

    #[inline]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[inline]
    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.index())
    }

    pub fn route_by_code(&self, code: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.code == code)
    }

    /// Routes whose stop list includes `stop`, in route order.
    pub fn routes_serving(&self, stop: StopId) -> impl Iterator<Item = &Route> + '_ {
        self.routes.iter().filter(move |r| r.serves(stop))
    }

    // ── Stops ─────────────────────────────────────────────────────────────

    /// Every stop in the network, numbered in route order.
    #[inline]
    pub fn all_stops(&self) -> &[Stop] {
        &self.stops
    }

    #[inline]
    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.index())
    }

    pub fn stop_by_code(&self, code: &str) -> Option<&Stop> {
        self.stops.iter().find(|s| s.code == code)
    }

    /// The stop closest to `point`, or `None` if the network has no stops.
    pub fn nearest_stop(&self, point: Coordinate) -> Option<&Stop> {
        self.stop_index.nearest(point).and_then(|id| self.stop(id))
    }

    /// Stops within `radius_m` metres of `point`, nearest first.
    pub fn stops_within(&self, point: Coordinate, radius_m: f64) -> Vec<&Stop> {
        self.stop_index
            .within(point, radius_m)
            .into_iter()
            .filter_map(|id| self.stop(id))
            .collect()
    }
}

// ── RouteNetworkBuilder ───────────────────────────────────────────────────────

struct PendingStop {
    code:     String,
    name:     String,
    position: Coordinate,
}

struct PendingRoute {
    code:      String,
    name:      String,
    color:     String,
    base_fare: f64,
    path:      Vec<Coordinate>,
    stops:     Vec<PendingStop>,
}

/// Incrementally declares routes and stops, then validates everything in
/// [`build`](Self::build).
#[derive(Default)]
pub struct RouteNetworkBuilder {
    routes: Vec<PendingRoute>,
}

impl RouteNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a route.  Returns the `RouteId` it will have in the built
    /// network.
    pub fn add_route(
        &mut self,
        code:      impl Into<String>,
        name:      impl Into<String>,
        color:     impl Into<String>,
        base_fare: f64,
        path:      Vec<Coordinate>,
    ) -> RouteId {
        let id = RouteId(self.routes.len() as u32);
        self.routes.push(PendingRoute {
            code: code.into(),
            name: name.into(),
            color: color.into(),
            base_fare,
            path,
            stops: Vec::new(),
        });
        id
    }

    /// Append a stop to `route`'s ordered stop list.
    pub fn add_stop(
        &mut self,
        route:    RouteId,
        code:     impl Into<String>,
        name:     impl Into<String>,
        position: Coordinate,
    ) -> NetworkResult<()> {
        let pending = self
            .routes
            .get_mut(route.index())
            .ok_or(NetworkError::RouteNotFound(route))?;
        pending.stops.push(PendingStop { code: code.into(), name: name.into(), position });
        Ok(())
    }

    /// Validate and freeze the network.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::TooFewPoints`] / [`NetworkError::InvalidCoordinate`]
    ///   for a malformed path.
    /// - [`NetworkError::DuplicateRoute`] if two routes share a code.
    /// - [`NetworkError::ConflictingStop`] if one stop code is declared at two
    ///   different positions.
    pub fn build(self) -> NetworkResult<RouteNetwork> {
        let mut routes: Vec<Route> = Vec::with_capacity(self.routes.len());
        let mut stops: Vec<Stop> = Vec::new();
        let mut stop_ids: HashMap<String, StopId> = HashMap::new();

        for (i, pending) in self.routes.into_iter().enumerate() {
            if routes.iter().any(|r| r.code == pending.code) {
                return Err(NetworkError::DuplicateRoute(pending.code));
            }
            let path = RoutePath::new(&pending.code, pending.path)?;

            let mut route_stops = Vec::with_capacity(pending.stops.len());
            for stop in pending.stops {
                let id = match stop_ids.get(&stop.code) {
                    Some(&existing) => {
                        if stops[existing.index()].position != stop.position {
                            return Err(NetworkError::ConflictingStop(stop.code));
                        }
                        existing
                    }
                    None => {
                        let id = StopId(stops.len() as u32);
                        stop_ids.insert(stop.code.clone(), id);
                        stops.push(Stop {
                            id,
                            code:     stop.code,
                            name:     stop.name,
                            position: stop.position,
                        });
                        id
                    }
                };
                route_stops.push(id);
            }

            routes.push(Route {
                id:        RouteId(i as u32),
                code:      pending.code,
                name:      pending.name,
                color:     pending.color,
                path,
                stops:     route_stops,
                base_fare: pending.base_fare,
            });
        }

        let stop_index = StopIndex::build(&stops);
        Ok(RouteNetwork { routes, stops, stop_index })
    }
}
