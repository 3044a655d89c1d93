//! The `Simulation` struct and its tick.

use log::debug;

use ts_core::{RandomSource, SimClock, SimConfig, StopId, Tick, VehicleId};
use ts_eta::{Arrival, ArrivalScope, DEFAULT_ARRIVALS, Eta, eta_to_stop, next_arrivals};
use ts_fleet::{Fleet, FleetError, MotionParams, Vehicle, advance};
use ts_network::RouteNetwork;

use crate::{SimError, SimObserver, SimResult};

/// Owns the route network, the fleet, and the clock.
///
/// The fleet has a single writer, the tick ([`advance_all`](Self::advance_all)
/// or [`advance_all_at`](Self::advance_all_at)); every other method is a
/// read-only query.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Simulation {
    /// Global configuration (tick interval, seed, snapshot interval, …).
    pub config: SimConfig,

    /// Tick counter, accumulated simulated time, and the latest tick stamp.
    pub clock: SimClock,

    /// Static routes and stops.  Never mutated after build.
    pub network: RouteNetwork,

    pub(crate) fleet:  Fleet,
    pub(crate) motion: MotionParams,
}

impl Simulation {
    // ── The tick ──────────────────────────────────────────────────────────

    /// Advance every vehicle by `elapsed_ms` and re-derive its position.
    ///
    /// One complete, atomic update of the whole fleet, stamped with the
    /// accumulated simulated time.  Returns the number of vehicles advanced.
    pub fn advance_all(&mut self, elapsed_ms: u64) -> usize {
        self.clock.advance(elapsed_ms);
        self.advance_fleet(elapsed_ms)
    }

    /// Like [`advance_all`](Self::advance_all), but stamps the tick (and
    /// every vehicle's `last_update_ms`) with the real time `now_unix_ms`.
    pub fn advance_all_at(&mut self, elapsed_ms: u64, now_unix_ms: i64) -> usize {
        self.clock.advance_to(elapsed_ms, now_unix_ms);
        self.advance_fleet(elapsed_ms)
    }

    /// One tick with observer hooks: start, advance, end, and a snapshot
    /// when one is due.
    ///
    /// Returns the tick just completed; tick `n` is the state after `n`
    /// advances, so the first call returns `T1`.
    pub fn step<O: SimObserver + ?Sized>(&mut self, elapsed_ms: u64, observer: &mut O) -> Tick {
        self.step_with(elapsed_ms, None, observer)
    }

    /// [`step`](Self::step) stamped with the real time `now_unix_ms`.  Used
    /// by the [`Scheduler`](crate::Scheduler).
    pub fn step_at<O: SimObserver + ?Sized>(
        &mut self,
        elapsed_ms:  u64,
        now_unix_ms: i64,
        observer:    &mut O,
    ) -> Tick {
        self.step_with(elapsed_ms, Some(now_unix_ms), observer)
    }

    fn step_with<O: SimObserver + ?Sized>(
        &mut self,
        elapsed_ms:  u64,
        now_unix_ms: Option<i64>,
        observer:    &mut O,
    ) -> Tick {
        let tick = self.clock.current_tick + 1;
        observer.on_tick_start(tick);
        let advanced = match now_unix_ms {
            Some(now) => self.advance_all_at(elapsed_ms, now),
            None => self.advance_all(elapsed_ms),
        };
        let now = self.clock.current_unix_ms();
        observer.on_tick_end(tick, now, advanced);

        let every = self.config.output_interval_ticks;
        if every > 0 && tick.0 % every == 0 {
            observer.on_snapshot(tick, now, self.fleet.vehicles());
        }
        tick
    }

    /// Batch run: tick at `config.tick_interval_ms` until
    /// `config.end_tick()`, without waiting on real time.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let interval = self.config.tick_interval_ms;
        while self.clock.current_tick < self.config.end_tick() {
            self.step(interval, observer);
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        let interval = self.config.tick_interval_ms;
        for _ in 0..n {
            self.step(interval, observer);
        }
        Ok(())
    }

    /// Transition every vehicle to the clock's current tick.
    fn advance_fleet(&mut self, elapsed_ms: u64) -> usize {
        let now_ms = self.clock.current_unix_ms();

        // Explicit field borrows so the borrow checker sees disjoint access.
        let network = &self.network;
        let motion = &self.motion;
        let (vehicles, rngs) = self.fleet.parts_mut();

        #[cfg(not(feature = "parallel"))]
        for (slot, rng) in vehicles.iter_mut().zip(rngs.iter_mut()) {
            *slot = step_vehicle(slot, network, elapsed_ms, now_ms, motion, rng);
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            vehicles
                .par_iter_mut()
                .zip(rngs.par_iter_mut())
                .for_each(|(slot, rng)| {
                    *slot = step_vehicle(slot, network, elapsed_ms, now_ms, motion, rng);
                });
        }

        debug!("{}: advanced {} vehicles by {} ms", self.clock, vehicles.len(), elapsed_ms);
        vehicles.len()
    }

    // ── Read-only queries ─────────────────────────────────────────────────

    /// The live fleet, in `VehicleId` order.
    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        self.fleet.vehicles()
    }

    #[inline]
    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.fleet.get(id)
    }

    #[inline]
    pub fn motion(&self) -> &MotionParams {
        &self.motion
    }

    /// Estimated arrival of one vehicle at one stop.
    pub fn eta_to_stop(&self, vehicle: VehicleId, stop: StopId) -> SimResult<Eta> {
        let v = self.fleet.get(vehicle).ok_or(SimError::VehicleNotFound(vehicle))?;
        let s = self.network.stop(stop).ok_or(SimError::StopNotFound(stop))?;
        let route = self
            .network
            .route(v.route)
            .ok_or_else(|| FleetError::UnknownRoute { label: v.label.clone(), route: v.route })?;
        Ok(eta_to_stop(v, route, s))
    }

    /// The `limit` soonest arrivals at `stop` (empty for an unknown stop).
    pub fn arrivals(&self, stop: StopId, limit: usize, scope: ArrivalScope) -> Vec<Arrival> {
        next_arrivals(self.fleet.vehicles(), &self.network, stop, limit, scope)
    }

    /// The default board: three soonest arrivals across every route.
    pub fn next_arrivals(&self, stop: StopId) -> Vec<Arrival> {
        self.arrivals(stop, DEFAULT_ARRIVALS, ArrivalScope::AllRoutes)
    }
}

/// Transition one vehicle and resolve its display coordinate.
fn step_vehicle<R: RandomSource>(
    vehicle:    &Vehicle,
    network:    &RouteNetwork,
    elapsed_ms: u64,
    now_ms:     i64,
    motion:     &MotionParams,
    rng:        &mut R,
) -> Vehicle {
    let mut next = advance(vehicle, elapsed_ms, now_ms, motion, rng);
    // Routes are checked against the fleet at build time.
    if let Some(route) = network.route(next.route) {
        next.position = route.path.position_at(next.progress);
    }
    next
}
