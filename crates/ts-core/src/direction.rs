//! Direction of travel along a route path.

use std::fmt;

/// Which way a vehicle is moving along its route's path.
///
/// `Forward` means toward increasing progress (path insertion order);
/// `Backward` toward decreasing progress.  There is no stopped state: a
/// paused simulation simply stops ticking.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// `+1.0` for `Forward`, `-1.0` for `Backward`.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Forward => "+1",
            Direction::Backward => "-1",
        })
    }
}
