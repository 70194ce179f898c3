//! RNG trait abstraction for predator decisions
//!
//! Every stochastic outcome in the core (attack success, spawn placement,
//! initial imprints) draws through `SimRng`, so a seeded generator replays a
//! run exactly.

/// Random number source consumed by the predator core
pub trait SimRng {
    /// Uniform f64 in `[0.0, 1.0)`
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `[low, high]` (inclusive). Returns `low` when the
    /// range is empty.
    fn int_in(&mut self, low: i32, high: i32) -> i32;
}

// Covers Xoshiro256StarStar, StdRng, ThreadRng and any other rand::Rng
impl<T: ?Sized + rand::Rng> SimRng for T {
    fn next_unit(&mut self) -> f64 {
        rand::Rng::r#gen(self)
    }

    fn int_in(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        rand::Rng::gen_range(self, low..=high)
    }
}
