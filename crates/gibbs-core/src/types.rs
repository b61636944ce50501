//! Core types and constants for Gibbs-phenomenon analysis
//!
//! This module defines the shared result/error types and the two physical
//! constants the whole crate revolves around.
//!
//! ## The two invariants
//!
//! Truncating the Fourier series of a signal with jump discontinuities leaves
//! two fingerprints that do not fade as the truncation order N grows:
//!
//! - **Radius-budget growth**: the sum of harmonic magnitudes keeps growing
//!   by the same amount, [`RADIUS_DOUBLING_LIMIT`] = (2/π)·ln 2, every time
//!   N doubles. Smooth signals show a vanishing increment instead.
//! - **Overshoot**: the partial sum overshoots each jump by a fixed fraction
//!   of the half jump height, converging to the Wilbraham-Gibbs constant
//!   [`WILBRAHAM_GIBBS`] = (2/π)·Si(π) rather than to 1.

use std::f64::consts::{FRAC_2_PI, LN_2};

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can occur during analysis operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalysisError {
    #[error("Non-positive plateau value: {plateau}. The jump classifier divides by it")]
    NonPositivePlateau { plateau: f64 },
}

/// The Wilbraham-Gibbs constant, (2/π)·Si(π) where Si is the sine integral.
///
/// A truncated Fourier series of a unit-amplitude square wave peaks at this
/// value just inside each jump, for every sufficiently large truncation
/// order: the overshoot is about 8.95% of the full jump height and never
/// decays. Re-derived by quadrature in this module's tests.
pub const WILBRAHAM_GIBBS: f64 = 1.178_979_744_472_167_5;

/// Limiting radius-budget increment per doubling of N, (2/π)·ln 2.
///
/// For a unit square wave the harmonic magnitudes are 4/(πk) over odd k, so
/// the budget gained between order N and 2N tends to (2/π)·ln 2 ≈ 0.441271.
/// The sawtooth shares the same limit; smooth signals tend to zero.
pub const RADIUS_DOUBLING_LIMIT: f64 = FRAC_2_PI * LN_2;

/// Default score threshold separating jump-bearing from smooth signals.
///
/// Empirical: true-jump signals score near [`RADIUS_DOUBLING_LIMIT`] ≈ 0.44
/// (for unit plateau) while smooth signals score near zero, so any cut
/// between those clusters works. 0.20 sits comfortably in the gap.
pub const DEFAULT_JUMP_THRESHOLD: f64 = 0.20;

/// Fitted intercept of the square-wave budget growth law
/// Budget(N) ≈ (2/π)·ln N + [`SQUARE_BUDGET_INTERCEPT`].
///
/// Empirical fit; used only by [`crate::sweep::theoretical_budget`] for
/// comparison curves, never by the analyzers themselves.
pub const SQUARE_BUDGET_INTERCEPT: f64 = 1.250;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    /// sin(t)/t, continuously extended at t = 0.
    fn sinc(t: f64) -> f64 {
        if t == 0.0 {
            1.0
        } else {
            t.sin() / t
        }
    }

    #[test]
    fn test_wilbraham_gibbs_matches_defining_integral() {
        // Composite Simpson quadrature of Si(pi) = integral of sin(t)/t
        // over [0, pi]. 4096 intervals put the rule error far below 1e-12.
        let n = 4096;
        let h = PI / n as f64;
        let mut acc = sinc(0.0) + sinc(PI);
        for i in 1..n {
            let w = if i % 2 == 1 { 4.0 } else { 2.0 };
            acc += w * sinc(i as f64 * h);
        }
        let si_pi = acc * h / 3.0;
        assert_relative_eq!(FRAC_2_PI * si_pi, WILBRAHAM_GIBBS, epsilon = 1e-12);
    }

    #[test]
    fn test_radius_doubling_limit_value() {
        assert_relative_eq!(RADIUS_DOUBLING_LIMIT, 0.4412712003053032, epsilon = 1e-15);
    }

    #[test]
    fn test_threshold_separates_the_two_clusters() {
        assert!(DEFAULT_JUMP_THRESHOLD < RADIUS_DOUBLING_LIMIT);
        assert!(DEFAULT_JUMP_THRESHOLD > 0.0);
    }

    #[test]
    fn test_error_display_mentions_value() {
        let err = AnalysisError::NonPositivePlateau { plateau: -1.5 };
        assert!(err.to_string().contains("-1.5"));
    }
}
