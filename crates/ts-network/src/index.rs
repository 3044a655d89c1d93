//! R-tree index over stop positions.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use ts_core::{Coordinate, StopId};
use ts_core::geo::EARTH_RADIUS_M;

use crate::Stop;

/// Metres per degree of latitude on the spherical model.
const METRES_PER_DEG_LAT: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

/// Entry stored in the R-tree: a 2-D `[lat, lon]` point with its `StopId`.
#[derive(Clone)]
struct StopEntry {
    point:    [f64; 2],
    position: Coordinate,
    id:       StopId,
}

impl RTreeObject for StopEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StopEntry {
    /// Squared Euclidean distance in lat/lon space.  Good enough to rank
    /// candidates within a city; exact distances use haversine.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

/// Spatial index answering nearest-stop and radius queries.
pub struct StopIndex {
    tree: RTree<StopEntry>,
}

impl StopIndex {
    pub fn build(stops: &[Stop]) -> Self {
        let entries = stops
            .iter()
            .map(|s| StopEntry {
                point:    [s.position.lat, s.position.lon],
                position: s.position,
                id:       s.id,
            })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Stop nearest to `point` in lat/lon space.
    pub fn nearest(&self, point: Coordinate) -> Option<StopId> {
        self.tree
            .nearest_neighbor(&[point.lat, point.lon])
            .map(|e| e.id)
    }

    /// Stops within `radius_m` metres (haversine) of `point`, nearest first.
    pub fn within(&self, point: Coordinate, radius_m: f64) -> Vec<StopId> {
        let half_lat = radius_m / METRES_PER_DEG_LAT;
        let half_lon = half_lat / point.lat.to_radians().cos().abs().max(1e-6);
        let envelope = AABB::from_corners(
            [point.lat - half_lat, point.lon - half_lon],
            [point.lat + half_lat, point.lon + half_lon],
        );

        let mut hits: Vec<(f64, StopId)> = self
            .tree
            .locate_in_envelope(&envelope)
            .map(|e| (e.position.distance_m(point), e.id))
            .filter(|(d, _)| *d <= radius_m)
            .collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        hits.into_iter().map(|(_, id)| id).collect()
    }
}
