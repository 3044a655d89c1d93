//! `ts-network` — static route network, path geometry, and stop lookup.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`path`]    | `RoutePath`, `position_along_path` — progress → coordinate      |
//! | [`route`]   | `Route`, `Stop`                                                 |
//! | [`network`] | `RouteNetwork` (read-only after build), `RouteNetworkBuilder`   |
//! | [`index`]   | `StopIndex` — R-tree nearest-stop queries                       |
//! | [`loader`]  | `load_routes_json`, `load_routes_reader`                        |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                              |
//!
//! Routes and stops are validated once, when the network is built, and are
//! never mutated afterwards.  A route with fewer than two path points is a
//! configuration error and fails the build.

pub mod error;
pub mod index;
pub mod loader;
pub mod network;
pub mod path;
pub mod route;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use index::StopIndex;
pub use loader::{load_routes_json, load_routes_reader};
pub use network::{RouteNetwork, RouteNetworkBuilder};
pub use path::{RoutePath, position_along_path};
pub use route::{Route, Stop};
