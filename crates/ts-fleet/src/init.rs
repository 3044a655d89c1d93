//! Startup fleet construction.

use log::info;

use ts_core::{CrowdLevel, Direction, RandomSource, SimConfig, VehicleId, VehicleRng};
use ts_network::RouteNetwork;

use crate::{Fleet, FleetResult, Vehicle};

/// Progress scale for odd-indexed routes when `alternate_spacing` is on.
const ODD_ROUTE_SPACING: f64 = 0.6;

/// Seed the fleet: `config.vehicles_per_route` vehicles on every route.
///
/// For the i-th vehicle on a route of n, initial progress is
/// `(i + 1) / (n + 1)`, scaled by 0.6 on odd routes when
/// `config.alternate_spacing` is set.  Speed (within
/// `config.speed_range_kmh`), crowd level, and direction are drawn from the
/// vehicle's own RNG, so the same seed always yields the same fleet.
///
/// The initial `position` is the route's path start; the first tick
/// resolves the real coordinate.
///
/// # Errors
///
/// Returns [`FleetError::Config`](crate::FleetError::Config) if `config`
/// fails validation (e.g. zero vehicles per route).
pub fn init_fleet(network: &RouteNetwork, config: &SimConfig) -> FleetResult<Fleet> {
    config.validate()?;

    let per_route = config.vehicles_per_route;
    let (speed_lo, speed_hi) = config.speed_range_kmh;

    let mut vehicles = Vec::with_capacity(network.route_count() * per_route);
    let mut rngs = Vec::with_capacity(vehicles.capacity());

    for (route_idx, route) in network.routes().iter().enumerate() {
        let scale = if config.alternate_spacing && route_idx % 2 == 1 {
            ODD_ROUTE_SPACING
        } else {
            1.0
        };

        for i in 0..per_route {
            let id = VehicleId(vehicles.len() as u32);
            let mut rng = VehicleRng::new(config.seed, id);

            let speed_kmh = rng.gen_f64(speed_lo, speed_hi);
            let crowd = CrowdLevel::from_index(rng.gen_index(CrowdLevel::ALL.len()) as u8);
            let direction = if rng.gen_bool(0.5) { Direction::Forward } else { Direction::Backward };

            vehicles.push(Vehicle {
                id,
                label: format!("{}-B{}", route.code, i + 1),
                route: route.id,
                position: route.path.start(),
                speed_kmh,
                crowd,
                last_update_ms: config.start_unix_ms,
                direction,
                progress: (i + 1) as f64 / (per_route + 1) as f64 * scale,
            });
            rngs.push(rng);
        }
    }

    info!(
        "initialized fleet: {} vehicles on {} routes ({} per route)",
        vehicles.len(),
        network.route_count(),
        per_route
    );
    Ok(Fleet::with_rngs(vehicles, rngs))
}
