//! The `Fleet` — every live vehicle plus its private RNG.
//!
//! # Why two vectors?
//!
//! The tick needs `&mut VehicleRng` for each vehicle while it reads the old
//! vehicle and writes the new one.  Keeping RNGs in a vector parallel to the
//! vehicles (instead of inside `Vehicle`) keeps `Vehicle` a plain cloneable
//! value and lets the simulator split-borrow both slices, sequentially or
//! under Rayon's `par_iter_mut()`.

use ts_core::{VehicleId, VehicleRng};
use ts_network::RouteNetwork;

use crate::{FleetError, FleetResult, Vehicle};

/// Owns the fleet.  Its size is fixed at construction.
pub struct Fleet {
    vehicles: Vec<Vehicle>,
    rngs:     Vec<VehicleRng>,
}

impl Fleet {
    /// Wrap a prepared fleet, seeding one RNG per vehicle from `seed`.
    ///
    /// Vehicle ids are reassigned to their position in `vehicles`.
    pub fn from_vehicles(mut vehicles: Vec<Vehicle>, seed: u64) -> Self {
        let rngs = vehicles
            .iter_mut()
            .enumerate()
            .map(|(i, v)| {
                v.id = VehicleId(i as u32);
                VehicleRng::new(seed, v.id)
            })
            .collect();
        Self { vehicles, rngs }
    }

    /// Used by [`init_fleet`](crate::init_fleet), which has already drawn the
    /// initial state from each RNG.
    pub(crate) fn with_rngs(vehicles: Vec<Vehicle>, rngs: Vec<VehicleRng>) -> Self {
        debug_assert_eq!(vehicles.len(), rngs.len());
        Self { vehicles, rngs }
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[inline]
    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.index())
    }

    pub fn get_by_label(&self, label: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.label == label)
    }

    /// Replace the entry for `next.id` with `next`.
    pub fn replace(&mut self, next: Vehicle) -> FleetResult<()> {
        let slot = self
            .vehicles
            .get_mut(next.id.index())
            .ok_or(FleetError::VehicleNotFound(next.id))?;
        *slot = next;
        Ok(())
    }

    /// Split borrow for the tick: every vehicle slot alongside its RNG.
    #[inline]
    pub fn parts_mut(&mut self) -> (&mut [Vehicle], &mut [VehicleRng]) {
        (&mut self.vehicles, &mut self.rngs)
    }

    /// Check that every vehicle references a route in `network`.
    pub fn check_routes(&self, network: &RouteNetwork) -> FleetResult<()> {
        match self.vehicles.iter().find(|v| network.route(v.route).is_none()) {
            Some(v) => Err(FleetError::UnknownRoute { label: v.label.clone(), route: v.route }),
            None => Ok(()),
        }
    }
}
