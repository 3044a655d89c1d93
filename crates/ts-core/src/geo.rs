//! Geographic coordinate type and the geo-math the engine is built on.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Every function here is pure
//! and deterministic: identical inputs give bit-identical outputs, which the
//! path resolver and the fleet tests rely on.

/// Mean Earth radius in metres (spherical model).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric bit-for-bit: the coordinate deltas are taken as absolute
    /// values, so `a.distance_m(b) == b.distance_m(a)` exactly, and a point's
    /// distance to itself is exactly `0.0`.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).abs().to_radians();
        let d_lon = (other.lon - self.lon).abs().to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Linear interpolation of latitude and longitude independently.
    ///
    /// `t = 0` yields `self`, `t = 1` yields `other`.  This is a planar
    /// approximation, not a great-circle interpolation; at city scale the
    /// difference is well below a metre.
    #[inline]
    pub fn lerp(self, other: Coordinate, t: f64) -> Coordinate {
        Coordinate {
            lat: self.lat + (other.lat - self.lat) * t,
            lon: self.lon + (other.lon - self.lon) * t,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Total length of a path in metres: the sum of `distance_m` over
/// consecutive points.  `0.0` for paths with fewer than two points.
pub fn path_length(path: &[Coordinate]) -> f64 {
    path.windows(2).map(|w| w[0].distance_m(w[1])).sum()
}
