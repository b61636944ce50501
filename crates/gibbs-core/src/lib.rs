//! # Gibbs Phenomenon Verification Engine
//!
//! Numerical verification of two invariants of truncated Fourier series
//! near jump discontinuities:
//!
//! - **Radius-budget growth**: for jump-bearing signals, the running total
//!   of harmonic coefficient magnitudes grows by a fixed increment
//!   (2/π)·ln 2 ≈ 0.4413 every time the truncation order doubles. For
//!   continuous signals the increment vanishes, which turns the budget
//!   into a jump detector.
//! - **Persistent overshoot**: the partial sum overshoots each jump to
//!   (2/π)·Si(π) ≈ 1.1790 times the half jump height, at every order. The
//!   squared error concentrates in zones around the jumps that shrink like
//!   1/N without giving up their share of the error.
//!
//! ## Components
//!
//! - [`signal`]: square/sawtooth/triangle targets, harmonic laws, jump sets
//! - [`partial_sum`]: direct synthesis of the truncated series
//! - [`radius_budget`]: budgets, doubling deltas, the true-jump classifier
//! - [`overshoot`]: N-scaled windows measuring the peak next to a jump
//! - [`energy_concentration`]: squared-error share inside the Gibbs zones
//! - [`crossover`]: first order where localized error beats global RMS
//! - [`sweep`]: all of the above across a ladder of N values, in parallel
//!
//! ## Example
//!
//! ```rust
//! use gibbs_core::prelude::*;
//!
//! // the harmonic budget of a square wave keeps growing: jumps detected
//! let square = SquareWave::new(1.0);
//! let r = radii(&square, 256);
//! let verdict = has_true_jumps(&r, &JumpClassifierConfig::default()).unwrap();
//! assert!(verdict.detected);
//!
//! // and the overshoot refuses to decay
//! let peak = overshoot(200, 1.0);
//! assert!((peak - WILBRAHAM_GIBBS).abs() < 1e-3);
//! ```

pub mod crossover;
pub mod energy_concentration;
pub mod grid;
pub mod observe;
pub mod overshoot;
pub mod partial_sum;
pub mod radius_budget;
pub mod signal;
pub mod sweep;
pub mod types;

pub use crossover::{estimate_crossover_harmonic, CrossoverConfig};
pub use energy_concentration::{energy_concentration_fraction, ZoneConfig};
pub use grid::{circular_distance, periodic_grid, wrap_to_pi};
pub use overshoot::{overshoot, peak_near_jump, OvershootConfig};
pub use partial_sum::{partial_sum, partial_sum_at};
pub use radius_budget::{
    cumulative_budget, doubling_deltas, has_true_jumps, radii, JumpClassifierConfig, JumpVerdict,
};
pub use signal::{Harmonic, HarmonicBandwidth, Jump, Sawtooth, Signal, SquareWave, TriangleWave};
pub use sweep::{
    budget_growth_curve, log_spaced_orders, theoretical_budget, verification_sweep, SweepConfig,
    SweepRow,
};
pub use types::{
    AnalysisError, AnalysisResult, DEFAULT_JUMP_THRESHOLD, RADIUS_DOUBLING_LIMIT, WILBRAHAM_GIBBS,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::crossover::{estimate_crossover_harmonic, CrossoverConfig};
    pub use crate::energy_concentration::{energy_concentration_fraction, ZoneConfig};
    pub use crate::grid::periodic_grid;
    pub use crate::overshoot::{overshoot, peak_near_jump, OvershootConfig};
    pub use crate::partial_sum::{partial_sum, partial_sum_at};
    pub use crate::radius_budget::{
        cumulative_budget, doubling_deltas, has_true_jumps, radii, JumpClassifierConfig,
    };
    pub use crate::signal::{Sawtooth, Signal, SquareWave, TriangleWave};
    pub use crate::sweep::{verification_sweep, SweepConfig, SweepRow};
    pub use crate::types::{AnalysisResult, RADIUS_DOUBLING_LIMIT, WILBRAHAM_GIBBS};
}
