//! `ts-sim` — the simulation object and what drives it.
//!
//! # One tick
//!
//! ```text
//! Simulation::advance_all(elapsed_ms)            (advance_all_at: real-time stamp)
//!   ① Clock     — tick count +1, elapsed += elapsed_ms, stamp the tick
//!   ② Advance   — every vehicle: ts_fleet::advance → new value
//!                 (parallel with the `parallel` feature)
//!   ③ Resolve   — position = route.path.position_at(progress)
//!   ④ Replace   — the new value takes the vehicle's slot
//! ```
//!
//! Observer hooks wrap each tick when driven through
//! [`Simulation::step`], [`Simulation::run`], or the [`Scheduler`].
//!
//! # What vs. when
//!
//! `Simulation` knows *what* a tick does and nothing about real time, so it
//! is unit-testable without timers.  [`Scheduler`] decides *when*: it owns a
//! thread that ticks a [`SharedSimulation`] every `tick_interval_ms`, never
//! reentrantly, stamps each tick with the real time, and can be paused,
//! resumed, and stopped.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Advances vehicles on Rayon's thread pool.              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ts_core::SimConfig;
//! use ts_sim::{NoopObserver, Scheduler, SharedSimulation, SimBuilder};
//!
//! let network = ts_network::load_routes_json(path)?;
//! let sim = SimBuilder::new(SimConfig::default(), network).build()?;
//! let shared = SharedSimulation::new(sim);
//! let handle = Scheduler::spawn(shared.clone(), NoopObserver)?;
//! let board = shared.next_arrivals(stop, 3, ArrivalScope::AllRoutes)?;
//! handle.stop()?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scheduler;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use scheduler::{Scheduler, SchedulerHandle, SharedSimulation};
pub use sim::Simulation;
