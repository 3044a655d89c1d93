//! Vehicle occupancy indicator.

use std::fmt;

/// Ordinal crowding signal shown on the map, from empty to packed.
///
/// The discriminant is the wire/display index (0..=3).  All arithmetic goes
/// through [`CrowdLevel::step`], which clamps, so a level can never leave the
/// range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CrowdLevel {
    #[default]
    Low = 0,
    Moderate = 1,
    Busy = 2,
    Packed = 3,
}

impl CrowdLevel {
    pub const ALL: [CrowdLevel; 4] = [
        CrowdLevel::Low,
        CrowdLevel::Moderate,
        CrowdLevel::Busy,
        CrowdLevel::Packed,
    ];

    /// Level for `index`, clamped to `Packed` above 3.
    #[inline]
    pub fn from_index(index: u8) -> CrowdLevel {
        Self::ALL[index.min(3) as usize]
    }

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Move `delta` levels up (positive) or down (negative), clamped to
    /// `Low..=Packed`.
    pub fn step(self, delta: i8) -> CrowdLevel {
        let next = (self.index() as i16 + delta as i16).clamp(0, 3);
        Self::from_index(next as u8)
    }

    /// Human-readable label for popups.
    pub fn label(self) -> &'static str {
        match self {
            CrowdLevel::Low => "Low",
            CrowdLevel::Moderate => "Moderate",
            CrowdLevel::Busy => "Busy",
            CrowdLevel::Packed => "Packed",
        }
    }

    /// Marker colour (hex) for the map renderer: green → red.
    pub fn color(self) -> &'static str {
        match self {
            CrowdLevel::Low => "#22c55e",
            CrowdLevel::Moderate => "#84cc16",
            CrowdLevel::Busy => "#f59e0b",
            CrowdLevel::Packed => "#ef4444",
        }
    }
}

impl fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
