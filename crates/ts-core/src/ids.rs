//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is the position
//! of the entity in its owning `Vec` (route table, stop table, fleet), so
//! `id.index()` is a direct lookup.
//!
//! Human-facing codes such as `"R1"` or `"R1-B2"` live on the entities
//! themselves, not in the ids.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a route in the `RouteNetwork` route table.
    pub struct RouteId(u32);
}

typed_id! {
    /// Network-wide index of a stop.  Stops are numbered in route order as
    /// the network is built.
    pub struct StopId(u32);
}

typed_id! {
    /// Index of a vehicle in the fleet.  Assigned once at fleet
    /// initialization; the fleet never grows or shrinks afterwards.
    pub struct VehicleId(u32);
}
