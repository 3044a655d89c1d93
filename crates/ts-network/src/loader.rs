//! JSON route loader.
//!
//! # Format
//!
//! A top-level array with one object per route.  Path points and stops use
//! `lat` / `lng` (or `lon`) in degrees; `color` and `base_fare` are optional.
//!
//! ```json
//! [
//!   {
//!     "id": "R1",
//!     "name": "Blue Line",
//!     "color": "#2563eb",
//!     "base_fare": 12,
//!     "path": [{ "lat": 23.2599, "lng": 77.4126 }, { "lat": 23.2608, "lng": 77.4162 }],
//!     "stops": [{ "id": "S1", "name": "Central Square", "lat": 23.2599, "lng": 77.4126 }]
//!   }
//! ]
//! ```
//!
//! The whole file is validated through [`RouteNetworkBuilder::build`], so a
//! route with fewer than two path points fails the load.

use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;

use ts_core::Coordinate;

use crate::{NetworkError, NetworkResult, RouteNetwork, RouteNetworkBuilder};

// ── JSON records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PointRecord {
    lat: f64,
    #[serde(alias = "lng")]
    lon: f64,
}

#[derive(Deserialize)]
struct StopRecord {
    id:   String,
    name: String,
    lat:  f64,
    #[serde(alias = "lng")]
    lon:  f64,
}

#[derive(Deserialize)]
struct RouteRecord {
    id:        String,
    name:      String,
    #[serde(default)]
    color:     String,
    #[serde(default)]
    base_fare: f64,
    path:      Vec<PointRecord>,
    #[serde(default)]
    stops:     Vec<StopRecord>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a `RouteNetwork` from a JSON file.
pub fn load_routes_json(path: &Path) -> NetworkResult<RouteNetwork> {
    let file = std::fs::File::open(path)?;
    load_routes_reader(std::io::BufReader::new(file))
}

/// Like [`load_routes_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded route data.
pub fn load_routes_reader<R: Read>(reader: R) -> NetworkResult<RouteNetwork> {
    let records: Vec<RouteRecord> =
        serde_json::from_reader(reader).map_err(|e| NetworkError::Parse(e.to_string()))?;

    let mut builder = RouteNetworkBuilder::new();
    for record in records {
        let path = record
            .path
            .iter()
            .map(|p| Coordinate::new(p.lat, p.lon))
            .collect();
        let route = builder.add_route(record.id, record.name, record.color, record.base_fare, path);
        for stop in record.stops {
            builder.add_stop(route, stop.id, stop.name, Coordinate::new(stop.lat, stop.lon))?;
        }
    }

    let network = builder.build()?;
    info!(
        "loaded route network: {} routes, {} stops",
        network.route_count(),
        network.stop_count()
    );
    Ok(network)
}
