//! Unit tests for ts-fleet.

use std::collections::VecDeque;

use ts_core::{Coordinate, CrowdLevel, Direction, RandomSource, RouteId, SimConfig, VehicleId};
use ts_network::{RouteNetwork, RouteNetworkBuilder};

use crate::Vehicle;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Replays a fixed list of boolean draws; once exhausted every draw is
/// `false`.  Range draws return the low end.
struct Scripted {
    bools: VecDeque<bool>,
}

impl Scripted {
    fn new(bools: &[bool]) -> Self {
        Self { bools: bools.iter().copied().collect() }
    }

    fn quiet() -> Self {
        Self::new(&[])
    }
}

impl RandomSource for Scripted {
    fn gen_bool(&mut self, _p: f64) -> bool {
        self.bools.pop_front().unwrap_or(false)
    }

    fn gen_f64(&mut self, lo: f64, _hi: f64) -> f64 {
        lo
    }

    fn gen_index(&mut self, _n: usize) -> usize {
        0
    }
}

/// Two straight routes of a few hundred metres each.
fn two_route_network() -> RouteNetwork {
    let mut b = RouteNetworkBuilder::new();
    b.add_route("R1", "Blue Line", "#2563eb", 12.0, vec![
        Coordinate::new(23.2599, 77.4126),
        Coordinate::new(23.2622, 77.4201),
        Coordinate::new(23.269, 77.4342),
    ]);
    b.add_route("R2", "Teal Loop", "#14b8a6", 10.0, vec![
        Coordinate::new(23.2675, 77.405),
        Coordinate::new(23.2649, 77.414),
        Coordinate::new(23.2691, 77.4307),
    ]);
    b.build().unwrap()
}

fn bus(progress: f64, direction: Direction, speed_kmh: f64) -> Vehicle {
    Vehicle {
        id:             VehicleId(0),
        label:          "R1-B1".into(),
        route:          RouteId(0),
        position:       Coordinate::new(23.2599, 77.4126),
        speed_kmh,
        crowd:          CrowdLevel::Moderate,
        last_update_ms: 0,
        direction,
        progress,
    }
}

// ── reflect ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reflection {
    use super::*;
    use crate::reflect;

    fn assert_reflects(raw: f64, dir: Direction, want: f64, want_dir: Direction) {
        let (p, d) = reflect(raw, dir);
        assert!((p - want).abs() < 1e-9, "reflect({raw}) = {p}, want {want}");
        assert_eq!(d, want_dir, "reflect({raw}) direction");
    }

    #[test]
    fn in_range_is_unchanged() {
        assert_eq!(reflect(0.42, Direction::Forward), (0.42, Direction::Forward));
        assert_eq!(reflect(0.0, Direction::Backward), (0.0, Direction::Backward));
        assert_eq!(reflect(1.0, Direction::Forward), (1.0, Direction::Forward));
    }

    #[test]
    fn single_overshoot() {
        assert_reflects(1.3, Direction::Forward, 0.7, Direction::Backward);
        assert_reflects(-0.3, Direction::Backward, 0.3, Direction::Forward);
    }

    #[test]
    fn multiple_overshoot() {
        // 0 → 1 (flip) → 0 (flip) → 0.5
        assert_reflects(2.5, Direction::Forward, 0.5, Direction::Forward);
        // three boundaries crossed, then 0.2 back from 1
        assert_reflects(3.2, Direction::Forward, 0.8, Direction::Backward);
        // 0 (flip) → 1 (flip) → 0.5
        assert_reflects(-1.5, Direction::Backward, 0.5, Direction::Backward);
    }

    #[test]
    fn landing_on_a_boundary() {
        assert_reflects(2.0, Direction::Forward, 0.0, Direction::Backward);
        assert_reflects(-1.0, Direction::Backward, 1.0, Direction::Forward);
    }

    #[test]
    fn huge_overshoot_stays_in_range() {
        for raw in [17.25, -42.75, 1e6 + 0.125, -1e6 - 0.875] {
            let (p, _) = reflect(raw, Direction::Forward);
            assert!((0.0..=1.0).contains(&p), "reflect({raw}) = {p}");
        }
    }
}

// ── advance ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod advance {
    use super::*;
    use crate::{MotionParams, advance, metres_moved};

    /// 36 km/h for 200 s = 2000 m = 0.4 of the 5 km reference length.
    const SPEED_KMH: f64 = 36.0;
    const ELAPSED_MS: u64 = 200_000;

    #[test]
    fn metres_from_speed_and_time() {
        assert!((metres_moved(36.0, 1_000) - 10.0).abs() < 1e-12);
        assert_eq!(metres_moved(25.0, 0), 0.0);
    }

    #[test]
    fn reflects_at_upper_bound() {
        let v = bus(0.9, Direction::Forward, SPEED_KMH);
        let next = advance(&v, ELAPSED_MS, 5, &MotionParams::default(), &mut Scripted::quiet());
        assert!((next.progress - 0.7).abs() < 1e-9, "got {}", next.progress);
        assert_eq!(next.direction, Direction::Backward);
    }

    #[test]
    fn reflects_at_lower_bound() {
        let v = bus(0.1, Direction::Backward, SPEED_KMH);
        let next = advance(&v, ELAPSED_MS, 5, &MotionParams::default(), &mut Scripted::quiet());
        assert!((next.progress - 0.3).abs() < 1e-9, "got {}", next.progress);
        assert_eq!(next.direction, Direction::Forward);
    }

    #[test]
    fn progress_uses_reference_length_not_route_length() {
        let v = bus(0.0, Direction::Forward, SPEED_KMH);
        let params = MotionParams { reference_route_length_m: 10_000.0, ..MotionParams::default() };
        let next = advance(&v, ELAPSED_MS, 0, &params, &mut Scripted::quiet());
        assert!((next.progress - 0.2).abs() < 1e-12);
    }

    #[test]
    fn returns_new_value_and_leaves_input_alone() {
        let v = bus(0.5, Direction::Forward, 20.0);
        let before = v.clone();
        let next = advance(&v, 1_000, 1_700_000_000_000, &MotionParams::default(), &mut Scripted::quiet());
        assert_eq!(v, before);
        assert_eq!(next.last_update_ms, 1_700_000_000_000);
        assert_eq!(next.speed_kmh, 20.0);
        assert_eq!(next.position, v.position, "position is derived by the caller");
        assert_eq!(next.label, v.label);
        assert!(next.progress > v.progress);
    }

    #[test]
    fn crowd_walk_steps_and_clamps() {
        let params = MotionParams { crowd_walk_probability: 1.0, ..MotionParams::default() };

        let up = advance(&bus(0.5, Direction::Forward, 20.0), 1_000, 0, &params, &mut Scripted::new(&[true, true]));
        assert_eq!(up.crowd, CrowdLevel::Busy);

        let down = advance(&bus(0.5, Direction::Forward, 20.0), 1_000, 0, &params, &mut Scripted::new(&[true, false]));
        assert_eq!(down.crowd, CrowdLevel::Low);

        let mut packed = bus(0.5, Direction::Forward, 20.0);
        packed.crowd = CrowdLevel::Packed;
        let still = advance(&packed, 1_000, 0, &params, &mut Scripted::new(&[true, true]));
        assert_eq!(still.crowd, CrowdLevel::Packed);

        let mut empty = bus(0.5, Direction::Forward, 20.0);
        empty.crowd = CrowdLevel::Low;
        let still = advance(&empty, 1_000, 0, &params, &mut Scripted::new(&[true, false]));
        assert_eq!(still.crowd, CrowdLevel::Low);
    }

    #[test]
    fn no_walk_when_draw_fails() {
        let next = advance(&bus(0.5, Direction::Forward, 20.0), 1_000, 0, &MotionParams::default(), &mut Scripted::new(&[false, true]));
        assert_eq!(next.crowd, CrowdLevel::Moderate);
    }
}

// ── init_fleet ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod init {
    use std::collections::HashSet;

    use super::*;
    use crate::{FleetError, init_fleet};

    fn config(seed: u64) -> SimConfig {
        SimConfig { seed, start_unix_ms: 1_700_000_000_000, ..SimConfig::default() }
    }

    #[test]
    fn two_routes_two_each() {
        let net = two_route_network();
        let fleet = init_fleet(&net, &config(42)).unwrap();
        assert_eq!(fleet.len(), 4);

        let ids: HashSet<_> = fleet.vehicles().iter().map(|v| v.id).collect();
        assert_eq!(ids.len(), 4);
        let labels: HashSet<_> = fleet.vehicles().iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, HashSet::from(["R1-B1", "R1-B2", "R2-B1", "R2-B2"]));

        for v in fleet.vehicles() {
            assert!(net.route(v.route).is_some());
            assert_eq!(v.position, net.route(v.route).unwrap().path.start());
            assert!((18.0..=30.0).contains(&v.speed_kmh), "speed {}", v.speed_kmh);
            assert_eq!(v.last_update_ms, 1_700_000_000_000);
        }
    }

    #[test]
    fn alternating_progress_spacing() {
        let fleet = init_fleet(&two_route_network(), &config(1)).unwrap();
        let progress: Vec<f64> = fleet.vehicles().iter().map(|v| v.progress).collect();
        let want = [1.0 / 3.0, 2.0 / 3.0, 0.6 / 3.0, 1.2 / 3.0];
        for (got, want) in progress.iter().zip(want) {
            assert!((got - want).abs() < 1e-12, "{progress:?}");
        }
    }

    #[test]
    fn uniform_spacing_when_disabled() {
        let cfg = SimConfig { alternate_spacing: false, vehicles_per_route: 3, ..config(1) };
        let fleet = init_fleet(&two_route_network(), &cfg).unwrap();
        assert_eq!(fleet.len(), 6);
        for chunk in fleet.vehicles().chunks(3) {
            let p: Vec<f64> = chunk.iter().map(|v| v.progress).collect();
            assert_eq!(p, [0.25, 0.5, 0.75]);
        }
    }

    #[test]
    fn same_seed_same_fleet() {
        let net = two_route_network();
        let a = init_fleet(&net, &config(7)).unwrap();
        let b = init_fleet(&net, &config(7)).unwrap();
        assert_eq!(a.vehicles(), b.vehicles());
    }

    #[test]
    fn zero_vehicles_per_route_is_config_error() {
        let cfg = SimConfig { vehicles_per_route: 0, ..SimConfig::default() };
        assert!(matches!(init_fleet(&two_route_network(), &cfg), Err(FleetError::Config(_))));
    }

    #[test]
    fn empty_network_empty_fleet() {
        let fleet = init_fleet(&RouteNetwork::empty(), &SimConfig::default()).unwrap();
        assert!(fleet.is_empty());
    }
}

// ── Fleet ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fleet {
    use super::*;
    use crate::{Fleet, FleetError};

    #[test]
    fn from_vehicles_renumbers() {
        let fleet = Fleet::from_vehicles(vec![bus(0.1, Direction::Forward, 20.0); 3], 9);
        let ids: Vec<_> = fleet.vehicles().iter().map(|v| v.id).collect();
        assert_eq!(ids, [VehicleId(0), VehicleId(1), VehicleId(2)]);
        let (vehicles, rngs) = {
            let mut fleet = fleet;
            let (v, r) = fleet.parts_mut();
            (v.len(), r.len())
        };
        assert_eq!((vehicles, rngs), (3, 3));
    }

    #[test]
    fn replace_entry() {
        let mut fleet = Fleet::from_vehicles(vec![bus(0.1, Direction::Forward, 20.0); 2], 0);
        let mut next = fleet.get(VehicleId(1)).unwrap().clone();
        next.progress = 0.9;
        fleet.replace(next).unwrap();
        assert_eq!(fleet.get(VehicleId(1)).unwrap().progress, 0.9);
        assert_eq!(fleet.get(VehicleId(0)).unwrap().progress, 0.1);

        let mut stray = bus(0.5, Direction::Forward, 20.0);
        stray.id = VehicleId(10);
        assert!(matches!(fleet.replace(stray), Err(FleetError::VehicleNotFound(VehicleId(10)))));
    }

    #[test]
    fn check_routes_catches_unknown_route() {
        let net = two_route_network();
        let mut orphan = bus(0.5, Direction::Forward, 20.0);
        orphan.route = RouteId(5);
        let fleet = Fleet::from_vehicles(vec![bus(0.5, Direction::Forward, 20.0), orphan], 0);
        assert!(matches!(fleet.check_routes(&net), Err(FleetError::UnknownRoute { .. })));

        let ok = Fleet::from_vehicles(vec![bus(0.5, Direction::Forward, 20.0)], 0);
        assert!(ok.check_routes(&net).is_ok());
    }

    #[test]
    fn lookup_by_label() {
        let fleet = Fleet::from_vehicles(vec![bus(0.5, Direction::Forward, 20.0)], 0);
        assert!(fleet.get_by_label("R1-B1").is_some());
        assert!(fleet.get_by_label("R9-B1").is_none());
    }
}
