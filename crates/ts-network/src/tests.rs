//! Unit tests for ts-network.

use ts_core::Coordinate;

use crate::{RouteNetwork, RouteNetworkBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn c(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon)
}

fn close(a: Coordinate, b: Coordinate) -> bool {
    (a.lat - b.lat).abs() < 1e-9 && (a.lon - b.lon).abs() < 1e-9
}

/// Two routes sharing stop "S2":
///   R1: (0,0) → (0,0.01) → (0,0.02), stops S1, S2, S3
///   R2: (0.01,0.01) → (0,0.01) → (-0.01,0.01), stops S4, S2
fn two_route_network() -> RouteNetwork {
    let mut b = RouteNetworkBuilder::new();
    let r1 = b.add_route("R1", "Blue Line", "#2563eb", 12.0, vec![c(0.0, 0.0), c(0.0, 0.01), c(0.0, 0.02)]);
    b.add_stop(r1, "S1", "West", c(0.0, 0.0)).unwrap();
    b.add_stop(r1, "S2", "Junction", c(0.0, 0.01)).unwrap();
    b.add_stop(r1, "S3", "East", c(0.0, 0.02)).unwrap();
    let r2 = b.add_route("R2", "Teal Loop", "#14b8a6", 10.0, vec![c(0.01, 0.01), c(0.0, 0.01), c(-0.01, 0.01)]);
    b.add_stop(r2, "S4", "North", c(0.01, 0.01)).unwrap();
    b.add_stop(r2, "S2", "Junction", c(0.0, 0.01)).unwrap();
    b.build().unwrap()
}

// ── Path-position resolver ────────────────────────────────────────────────────

#[cfg(test)]
mod resolver {
    use super::*;
    use crate::{RoutePath, position_along_path};

    fn zigzag() -> Vec<Coordinate> {
        vec![c(23.2599, 77.4126), c(23.2608, 77.4162), c(23.2622, 77.4201), c(23.2641, 77.4233)]
    }

    #[test]
    fn endpoints_exact() {
        let path = zigzag();
        assert_eq!(position_along_path(&path, 0.0), Some(path[0]));
        assert_eq!(position_along_path(&path, 1.0), Some(path[3]));
        assert_eq!(position_along_path(&path, 1.7), Some(path[3]));
        assert_eq!(position_along_path(&path, -0.2), Some(path[0]));
    }

    #[test]
    fn empty_path_is_none() {
        assert_eq!(position_along_path(&[], 0.5), None);
    }

    #[test]
    fn uses_arc_length_not_index() {
        // Segment lengths 1 : 3 along the equator, so a quarter of the way is
        // the end of the first segment, not the middle of it.
        let path = vec![c(0.0, 0.0), c(0.0, 0.01), c(0.0, 0.04)];
        let p = position_along_path(&path, 0.25).unwrap();
        assert!(close(p, c(0.0, 0.01)), "got {p}");
        let half = position_along_path(&path, 0.5).unwrap();
        assert!(close(half, c(0.0, 0.02)), "got {half}");
    }

    #[test]
    fn zero_length_segment_does_not_divide_by_zero() {
        let path = vec![c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.02)];
        for i in 0..=20 {
            let p = position_along_path(&path, i as f64 / 20.0).unwrap();
            assert!(p.lat.is_finite() && p.lon.is_finite());
        }
        let all_same = vec![c(1.0, 1.0), c(1.0, 1.0)];
        assert_eq!(position_along_path(&all_same, 0.5), Some(c(1.0, 1.0)));
    }

    #[test]
    fn results_lie_on_a_segment() {
        let path = zigzag();
        for i in 0..=100 {
            let p = position_along_path(&path, i as f64 / 100.0).unwrap();
            let on_some_segment = path.windows(2).any(|w| {
                let (lo_lat, hi_lat) = (w[0].lat.min(w[1].lat), w[0].lat.max(w[1].lat));
                let (lo_lon, hi_lon) = (w[0].lon.min(w[1].lon), w[0].lon.max(w[1].lon));
                (lo_lat - 1e-12..=hi_lat + 1e-12).contains(&p.lat)
                    && (lo_lon - 1e-12..=hi_lon + 1e-12).contains(&p.lon)
            });
            assert!(on_some_segment, "progress {i}% resolved off-path to {p}");
        }
    }

    #[test]
    fn bit_stable() {
        let path = zigzag();
        for i in 0..=50 {
            let progress = i as f64 / 50.0;
            assert_eq!(position_along_path(&path, progress), position_along_path(&path, progress));
        }
    }

    #[test]
    fn route_path_validates() {
        assert!(RoutePath::new("R", vec![c(0.0, 0.0)]).is_err());
        assert!(RoutePath::new("R", vec![]).is_err());
        assert!(RoutePath::new("R", vec![c(0.0, 0.0), c(f64::NAN, 0.0)]).is_err());

        let path = RoutePath::new("R", zigzag()).unwrap();
        assert_eq!(path.start(), zigzag()[0]);
        assert_eq!(path.end(), zigzag()[3]);
        assert_eq!(path.length_m(), ts_core::path_length(&zigzag()));
        assert_eq!(path.position_at(0.4), position_along_path(&zigzag(), 0.4).unwrap());
    }
}

// ── RouteNetworkBuilder ───────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;
    use crate::NetworkError;
    use ts_core::{RouteId, StopId};

    #[test]
    fn builds_routes_and_stops() {
        let net = two_route_network();
        assert_eq!(net.route_count(), 2);
        // S2 is shared, so four distinct stops.
        assert_eq!(net.stop_count(), 4);

        let r1 = net.route(RouteId(0)).unwrap();
        assert_eq!(r1.code, "R1");
        assert_eq!(r1.color, "#2563eb");
        assert_eq!(r1.base_fare, 12.0);
        assert_eq!(r1.stops, vec![StopId(0), StopId(1), StopId(2)]);

        let r2 = net.route_by_code("R2").unwrap();
        assert_eq!(r2.stops, vec![StopId(3), StopId(1)]);
    }

    #[test]
    fn routes_serving_shared_stop() {
        let net = two_route_network();
        let junction = net.stop_by_code("S2").unwrap().id;
        let codes: Vec<_> = net.routes_serving(junction).map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["R1", "R2"]);

        let east = net.stop_by_code("S3").unwrap().id;
        assert_eq!(net.routes_serving(east).count(), 1);
    }

    #[test]
    fn too_few_points_fails_fast() {
        let mut b = RouteNetworkBuilder::new();
        b.add_route("R1", "Stub", "#000", 0.0, vec![c(0.0, 0.0)]);
        match b.build() {
            Err(NetworkError::TooFewPoints { code, got }) => {
                assert_eq!(code, "R1");
                assert_eq!(got, 1);
            }
            other => panic!("expected TooFewPoints, got {:?}", other.map(|n| n.route_count())),
        }
    }

    #[test]
    fn duplicate_route_code_rejected() {
        let mut b = RouteNetworkBuilder::new();
        b.add_route("R1", "A", "", 0.0, vec![c(0.0, 0.0), c(0.0, 0.01)]);
        b.add_route("R1", "B", "", 0.0, vec![c(0.0, 0.0), c(0.0, 0.01)]);
        assert!(matches!(b.build(), Err(NetworkError::DuplicateRoute(_))));
    }

    #[test]
    fn conflicting_stop_rejected() {
        let mut b = RouteNetworkBuilder::new();
        let r = b.add_route("R1", "A", "", 0.0, vec![c(0.0, 0.0), c(0.0, 0.01)]);
        b.add_stop(r, "S1", "Here", c(0.0, 0.0)).unwrap();
        b.add_stop(r, "S1", "There", c(0.0, 0.01)).unwrap();
        assert!(matches!(b.build(), Err(NetworkError::ConflictingStop(_))));
    }

    #[test]
    fn add_stop_to_unknown_route() {
        let mut b = RouteNetworkBuilder::new();
        let result = b.add_stop(RouteId(3), "S1", "Nowhere", c(0.0, 0.0));
        assert!(matches!(result, Err(NetworkError::RouteNotFound(RouteId(3)))));
    }

    #[test]
    fn empty_network() {
        let net = RouteNetwork::empty();
        assert!(net.is_empty());
        assert!(net.nearest_stop(c(0.0, 0.0)).is_none());
    }
}

// ── Stop index ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stop_index {
    use super::*;

    #[test]
    fn nearest_stop() {
        let net = two_route_network();
        let near_east = net.nearest_stop(c(0.0001, 0.0195)).unwrap();
        assert_eq!(near_east.code, "S3");
        let near_north = net.nearest_stop(c(0.011, 0.0101)).unwrap();
        assert_eq!(near_north.code, "S4");
    }

    #[test]
    fn stops_within_radius_sorted() {
        let net = two_route_network();
        // 0.01° of longitude at the equator ≈ 1.11 km.
        let hits: Vec<_> = net
            .stops_within(c(0.0, 0.009), 1_200.0)
            .into_iter()
            .map(|s| s.code.as_str())
            .collect();
        assert_eq!(hits.first(), Some(&"S2"));
        assert!(hits.contains(&"S1"));
        assert!(!hits.contains(&"S3"), "S3 is ~1.2 km+ away: {hits:?}");

        assert!(net.stops_within(c(5.0, 5.0), 500.0).is_empty());
    }
}

// ── JSON loader ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{NetworkError, load_routes_reader};

    const ROUTES_JSON: &str = r##"[
      {
        "id": "R1", "name": "Blue Line", "color": "#2563eb", "base_fare": 12,
        "path": [
          { "lat": 23.2599, "lng": 77.4126 },
          { "lat": 23.2608, "lng": 77.4162 },
          { "lat": 23.2622, "lng": 77.4201 }
        ],
        "stops": [
          { "id": "S1", "name": "Central Square", "lat": 23.2599, "lng": 77.4126 },
          { "id": "S2", "name": "City Mall", "lat": 23.2622, "lng": 77.4201 }
        ]
      },
      {
        "id": "R2", "name": "Teal Loop",
        "path": [{ "lat": 23.2675, "lon": 77.405 }, { "lat": 23.2657, "lon": 77.4094 }]
      }
    ]"##;

    #[test]
    fn loads_routes_and_stops() {
        let net = load_routes_reader(Cursor::new(ROUTES_JSON)).unwrap();
        assert_eq!(net.route_count(), 2);
        assert_eq!(net.stop_count(), 2);

        let r1 = net.route_by_code("R1").unwrap();
        assert_eq!(r1.name, "Blue Line");
        assert_eq!(r1.path.points().len(), 3);
        assert_eq!(r1.base_fare, 12.0);

        let r2 = net.route_by_code("R2").unwrap();
        assert_eq!(r2.color, "");
        assert!(r2.stops.is_empty());
        assert_eq!(r2.path.start().lon, 77.405);

        assert_eq!(net.stop_by_code("S2").unwrap().name, "City Mall");
    }

    #[test]
    fn single_point_route_fails_load() {
        let json = r#"[{ "id": "R9", "name": "Stub", "path": [{ "lat": 1.0, "lng": 1.0 }] }]"#;
        assert!(matches!(
            load_routes_reader(Cursor::new(json)),
            Err(NetworkError::TooFewPoints { .. })
        ));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            load_routes_reader(Cursor::new("{ not json")),
            Err(NetworkError::Parse(_))
        ));
    }
}
