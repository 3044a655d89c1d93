//! Deterministic per-vehicle RNG and the `RandomSource` seam.
//!
//! # Determinism strategy
//!
//! Each vehicle gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (vehicle_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive vehicle IDs uniformly across the seed space.
//! Vehicles never share RNG state, so the per-tick update order (or a
//! parallel update) cannot change the outcome of a run.
//!
//! All simulation code draws randomness through [`RandomSource`] rather than
//! a concrete generator, so tests can script the draws.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::VehicleId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The only way simulation logic touches randomness.
pub trait RandomSource {
    /// `true` with probability `p` (clamped to [0, 1]).
    fn gen_bool(&mut self, p: f64) -> bool;

    /// Uniform value in `lo..=hi`.  Returns `lo` when `hi <= lo`.
    fn gen_f64(&mut self, lo: f64, hi: f64) -> f64;

    /// Uniform index in `0..n`.  Returns `0` when `n == 0`.
    fn gen_index(&mut self, n: usize) -> usize;
}

// ── VehicleRng ────────────────────────────────────────────────────────────────

/// Per-vehicle deterministic RNG.
///
/// Create one per vehicle at fleet init and keep them in a parallel `Vec`
/// alongside the vehicles.  Each Rayon worker gets its own `&mut` slot, so
/// no generator is ever shared between threads.
pub struct VehicleRng(SmallRng);

impl VehicleRng {
    /// Seed deterministically from the run's global seed and a vehicle ID.
    pub fn new(global_seed: u64, vehicle: VehicleId) -> Self {
        let seed = global_seed ^ (vehicle.0 as u64).wrapping_mul(MIXING_CONSTANT);
        VehicleRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for VehicleRng {
    #[inline]
    fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    #[inline]
    fn gen_f64(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        self.0.gen_range(lo..=hi)
    }

    #[inline]
    fn gen_index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.0.gen_range(0..n)
    }
}
