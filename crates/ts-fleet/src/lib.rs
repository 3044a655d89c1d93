//! `ts-fleet` — simulated vehicles and how they move.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`vehicle`] | `Vehicle` — one simulated bus, a plain value                      |
//! | [`motion`]  | `advance`, `reflect`, `MotionParams` — the per-tick transition    |
//! | [`init`]    | `init_fleet` — seeds the startup fleet from the route network     |
//! | [`fleet`]   | `Fleet` — `Vec<Vehicle>` + parallel per-vehicle RNGs              |
//! | [`error`]   | `FleetError`, `FleetResult<T>`                                    |
//!
//! # Movement model (ping-pong along the path)
//!
//! A vehicle's authoritative position is `(progress, direction)`: a fraction
//! of its route's arc length plus which way it is heading.  Each tick
//! [`advance`] converts distance travelled into a progress delta, bounces off
//! either end of the path (reflection, never clamping or wrapping), and may
//! nudge the crowd level.  The displayed `position` is *derived*: callers
//! resolve it from the route path after every transition.

pub mod error;
pub mod fleet;
pub mod init;
pub mod motion;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use error::{FleetError, FleetResult};
pub use fleet::Fleet;
pub use init::init_fleet;
pub use motion::{MotionParams, advance, metres_moved, reflect};
pub use vehicle::Vehicle;
