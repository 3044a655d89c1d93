//! Embedded sample network: two routes through a small city centre.

use std::io::Cursor;

use ts_network::{NetworkResult, RouteNetwork, load_routes_reader};

pub const SAMPLE_ROUTES_JSON: &str = r##"[
  {
    "id": "R1",
    "name": "Blue Line",
    "color": "#2563eb",
    "base_fare": 12,
    "path": [
      { "lat": 23.2599, "lng": 77.4126 },
      { "lat": 23.2608, "lng": 77.4162 },
      { "lat": 23.2622, "lng": 77.4201 },
      { "lat": 23.2641, "lng": 77.4233 },
      { "lat": 23.2662, "lng": 77.4265 },
      { "lat": 23.268,  "lng": 77.4301 },
      { "lat": 23.269,  "lng": 77.4342 }
    ],
    "stops": [
      { "id": "S1", "name": "Central Square", "lat": 23.2599, "lng": 77.4126 },
      { "id": "S2", "name": "City Mall",      "lat": 23.2622, "lng": 77.4201 },
      { "id": "S3", "name": "Lake View",      "lat": 23.2662, "lng": 77.4265 },
      { "id": "S4", "name": "Tech Park",      "lat": 23.269,  "lng": 77.4342 }
    ]
  },
  {
    "id": "R2",
    "name": "Teal Loop",
    "color": "#14b8a6",
    "base_fare": 10,
    "path": [
      { "lat": 23.2675, "lng": 77.405 },
      { "lat": 23.2657, "lng": 77.4094 },
      { "lat": 23.2649, "lng": 77.414 },
      { "lat": 23.2652, "lng": 77.4189 },
      { "lat": 23.266,  "lng": 77.4228 },
      { "lat": 23.2673, "lng": 77.4269 },
      { "lat": 23.2691, "lng": 77.4307 }
    ],
    "stops": [
      { "id": "S5", "name": "Old Town",   "lat": 23.2675, "lng": 77.405 },
      { "id": "S6", "name": "Museum",     "lat": 23.2649, "lng": 77.414 },
      { "id": "S7", "name": "Stadium",    "lat": 23.266,  "lng": 77.4228 },
      { "id": "S8", "name": "University", "lat": 23.2691, "lng": 77.4307 }
    ]
  }
]"##;

pub fn sample_network() -> NetworkResult<RouteNetwork> {
    load_routes_reader(Cursor::new(SAMPLE_ROUTES_JSON))
}
