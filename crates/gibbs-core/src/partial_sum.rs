//! Partial-sum synthesizer: direct evaluation of truncated sine series
//!
//! Evaluates S_N(x) = Σ c_k·sin(k·x) over a signal's harmonic set by direct
//! summation. No FFT: truncation orders and grids are small enough that the
//! goal is pointwise accuracy near jumps, not asymptotic throughput, and
//! direct summation keeps the evaluation exact at arbitrary (non-uniform)
//! sample points such as overshoot windows.
//!
//! ## Example
//!
//! ```rust
//! use gibbs_core::partial_sum::partial_sum_at;
//! use gibbs_core::signal::SquareWave;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let square = SquareWave::new(1.0);
//! // with many harmonics the sum sits close to the +1 plateau
//! let s = partial_sum_at(&square, 64, FRAC_PI_2);
//! assert!((s - 1.0).abs() < 0.01);
//! ```

use crate::signal::{Harmonic, Signal};

/// Evaluate the order-N partial sum of `signal` at a single point.
///
/// N = 0 yields 0.0 (the zero function).
pub fn partial_sum_at(signal: &dyn Signal, n: u32, x: f64) -> f64 {
    sum_terms(&signal.harmonics(n), x)
}

/// Evaluate the order-N partial sum of `signal` at every grid point.
///
/// The harmonic set is computed once and reused across the grid. N = 0
/// yields all zeros.
pub fn partial_sum(signal: &dyn Signal, n: u32, grid: &[f64]) -> Vec<f64> {
    let terms = signal.harmonics(n);
    grid.iter().map(|&x| sum_terms(&terms, x)).collect()
}

fn sum_terms(terms: &[Harmonic], x: f64) -> f64 {
    terms
        .iter()
        .map(|t| t.coefficient * (t.k as f64 * x).sin())
        .sum()
}
