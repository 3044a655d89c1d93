//! Ranked "next arrivals" board for a focused stop.

use ts_core::{CrowdLevel, RouteId, StopId, VehicleId};
use ts_fleet::Vehicle;
use ts_network::RouteNetwork;

use crate::{Eta, eta_to_stop};

/// How many arrivals the map panel shows.
pub const DEFAULT_ARRIVALS: usize = 3;

/// Which vehicles compete for a place on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ArrivalScope {
    /// Every vehicle on every route.
    #[default]
    AllRoutes,
    /// Only vehicles whose route lists the stop.
    ServingRoutes,
}

/// One row of the board.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrival {
    pub vehicle: VehicleId,
    pub label:   String,
    pub route:   RouteId,
    pub crowd:   CrowdLevel,
    pub eta:     Eta,
}

/// The `limit` soonest arrivals at `stop`, soonest first.
///
/// Computes [`eta_to_stop`] for every vehicle in scope and stable-sorts by
/// ETA, so ties keep fleet order.  An unknown stop, an empty fleet, or a
/// scope no vehicle qualifies for all give an empty board.
pub fn next_arrivals(
    vehicles: &[Vehicle],
    network:  &RouteNetwork,
    stop:     StopId,
    limit:    usize,
    scope:    ArrivalScope,
) -> Vec<Arrival> {
    let Some(stop) = network.stop(stop) else {
        return vec![];
    };

    let mut board: Vec<Arrival> = vehicles
        .iter()
        .filter_map(|v| {
            let route = network.route(v.route)?;
            if scope == ArrivalScope::ServingRoutes && !route.serves(stop.id) {
                return None;
            }
            Some(Arrival {
                vehicle: v.id,
                label:   v.label.clone(),
                route:   v.route,
                crowd:   v.crowd,
                eta:     eta_to_stop(v, route, stop),
            })
        })
        .collect();

    board.sort_by_key(|a| a.eta);
    board.truncate(limit);
    board
}
