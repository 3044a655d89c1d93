//! `ts-core` — foundational types for the transit fleet simulator.
//!
//! This crate is a dependency of every other `ts-*` crate.  It has no `ts-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RouteId`, `StopId`, `VehicleId`                      |
//! | [`geo`]         | `Coordinate`, haversine distance, path length, lerp   |
//! | [`direction`]   | `Direction` — forward / backward along a path         |
//! | [`crowd`]       | `CrowdLevel` — empty → packed ordinal                 |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `RandomSource` seam, `VehicleRng` (per-vehicle)       |
//! | [`error`]       | `TsError`, `TsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod crowd;
pub mod direction;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crowd::CrowdLevel;
pub use direction::Direction;
pub use error::{TsError, TsResult};
pub use geo::{Coordinate, path_length};
pub use ids::{RouteId, StopId, VehicleId};
pub use rng::{RandomSource, VehicleRng};
pub use time::{SimClock, SimConfig, Tick};
