//! Route geometry and the path-position resolver.
//!
//! A path is traversed by **arc length**, not by control-point index: progress
//! `0.5` is the point halfway along the path's total length, wherever that
//! falls among the segments.

use ts_core::{Coordinate, path_length};

use crate::{NetworkError, NetworkResult};

/// Map `progress ∈ [0, 1]` to a coordinate along `path`.
///
/// Walks the segments accumulating length until `progress * total_length`
/// falls inside one, then interpolates within it.  `progress >= 1` returns the
/// final point exactly and `progress <= 0` the first.  Zero-length segments
/// (repeated points) resolve with a local fraction of `0`.
///
/// Pure and bit-stable.  Returns `None` only for an empty path.
pub fn position_along_path(path: &[Coordinate], progress: f64) -> Option<Coordinate> {
    let first = *path.first()?;
    let last = *path.last()?;
    if progress >= 1.0 {
        return Some(last);
    }
    if progress <= 0.0 {
        return Some(first);
    }

    let mut target = path_length(path) * progress;
    for seg in path.windows(2) {
        let len = seg[0].distance_m(seg[1]);
        if target <= len {
            let t = if len == 0.0 { 0.0 } else { target / len };
            return Some(seg[0].lerp(seg[1], t));
        }
        target -= len;
    }
    Some(last)
}

/// A validated route path: at least two finite points, with the total length
/// cached.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutePath {
    points:   Vec<Coordinate>,
    length_m: f64,
}

impl RoutePath {
    /// Validate `points` for the route called `code`.
    pub fn new(code: &str, points: Vec<Coordinate>) -> NetworkResult<Self> {
        if points.len() < 2 {
            return Err(NetworkError::TooFewPoints { code: code.to_owned(), got: points.len() });
        }
        if points.iter().any(|p| !(p.lat.is_finite() && p.lon.is_finite())) {
            return Err(NetworkError::InvalidCoordinate { code: code.to_owned() });
        }
        let length_m = path_length(&points);
        Ok(Self { points, length_m })
    }

    #[inline]
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// First point — where progress 0 lies.
    #[inline]
    pub fn start(&self) -> Coordinate {
        self.points[0]
    }

    /// Last point — where progress 1 lies.
    #[inline]
    pub fn end(&self) -> Coordinate {
        self.points[self.points.len() - 1]
    }

    /// Total arc length in metres.
    #[inline]
    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    /// Coordinate at `progress` (see [`position_along_path`]).
    pub fn position_at(&self, progress: f64) -> Coordinate {
        position_along_path(&self.points, progress).unwrap_or(self.start())
    }
}
