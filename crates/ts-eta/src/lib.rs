//! `ts-eta` — "when is the next bus?"
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`eta`]   | `Eta`, `eta_to_stop` — straight-line proximity estimate     |
//! | [`board`] | `Arrival`, `ArrivalScope`, `next_arrivals` — ranked board   |
//!
//! Everything here is a synchronous, read-only query over a fleet snapshot;
//! nothing mutates vehicle state.

pub mod board;
pub mod eta;


pub use board::{Arrival, ArrivalScope, DEFAULT_ARRIVALS, next_arrivals};
pub use eta::{ETA_FLOOR_SECS, Eta, eta_to_stop};
