//! Fluent builder for constructing a [`Simulation`].

use log::info;

use ts_core::SimConfig;
use ts_fleet::{Fleet, MotionParams, init_fleet};
use ts_network::RouteNetwork;

use crate::{SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick interval, seed, vehicles per route, …
/// - [`RouteNetwork`] — the static route set
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                      |
/// |----------------|----------------------------------------------|
/// | `.fleet(f)`    | `init_fleet(&network, &config)`              |
/// | `.motion(p)`   | `MotionParams::from(&config)`                |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config, network).build()?;
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    network: RouteNetwork,
    fleet:   Option<Fleet>,
    motion:  Option<MotionParams>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, network: RouteNetwork) -> Self {
        Self {
            config,
            network,
            fleet:  None,
            motion: None,
        }
    }

    /// Supply a prepared fleet instead of seeding one from the config.
    ///
    /// Every vehicle must reference a route in the network.
    pub fn fleet(mut self, fleet: Fleet) -> Self {
        self.fleet = Some(fleet);
        self
    }

    /// Override the motion tunables taken from the config.
    pub fn motion(mut self, motion: MotionParams) -> Self {
        self.motion = Some(motion);
        self
    }

    /// Validate inputs, seed the fleet if none was supplied, and return a
    /// ready-to-tick [`Simulation`].
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;

        let fleet = match self.fleet {
            Some(fleet) => {
                fleet.check_routes(&self.network)?;
                fleet
            }
            None => init_fleet(&self.network, &self.config)?,
        };
        let motion = self.motion.unwrap_or_else(|| MotionParams::from(&self.config));

        info!(
            "simulation ready: {} vehicles on {} routes, tick {} ms, seed {}",
            fleet.len(),
            self.network.route_count(),
            self.config.tick_interval_ms,
            self.config.seed
        );

        Ok(Simulation {
            clock:   self.config.make_clock(),
            config:  self.config,
            network: self.network,
            fleet,
            motion,
        })
    }
}
