//! Non-homogeneous Poisson process generation via Lewis-Shedler thinning.
//!
//! A time-varying arrival rate `λ(t)` dominated by a constant `λ_max` is
//! simulated by drawing candidates from a homogeneous process at rate
//! `λ_max`, then keeping each candidate `t` independently:
//! ```text
//! accept t  ⇔  U < λ(t) / λ_max,   U ~ Uniform(0, 1)
//! ```
//! Accepted candidates keep their order, so the output is again a strictly
//! increasing arrival sequence.

use std::fmt;

use stochsim_core::{RandomSource, SimResult, SimulationError};

use super::homogeneous::HomogeneousProcess;
use super::traits::RateFunction;
use crate::path::ArrivalSequence;

/// Time-varying-rate Poisson arrival generator built on thinning.
///
/// # Dominance bound
///
/// Correctness rests on the caller-supplied invariant
/// `rate_fn(t) <= rate_max` for every `t` in `[0, horizon]`.
/// **The bound is not checked during generation.** Where the rate function
/// exceeds it, the acceptance probability saturates at one and the realised
/// process silently under-counts arrivals relative to the requested rate;
/// no error is raised. Callers who want an early diagnostic can run the
/// opt-in [`check_bound`](Self::check_bound) before generating.
///
/// # Examples
///
/// ```rust
/// use stochsim_core::RandomSource;
/// use stochsim_processes::point::ThinningProcess;
///
/// let mut source = RandomSource::from_seed(12345);
/// let rate = |t: f64| 2.0 + 2.0 * (0.1 * std::f64::consts::PI * t).sin();
/// let process = ThinningProcess::new(rate, 4.0, 20.0).unwrap();
///
/// let arrivals = process.generate(&mut source);
/// assert!(arrivals.times().windows(2).all(|w| w[0] < w[1]));
/// assert!(arrivals.times().iter().all(|&t| t <= 20.0));
/// ```
#[derive(Clone)]
pub struct ThinningProcess<F> {
    rate_fn: F,
    candidates: HomogeneousProcess,
}

impl<F: RateFunction> ThinningProcess<F> {
    /// Creates a generator for the given rate function, dominance bound,
    /// and horizon.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `rate_max` is non-positive or non-finite, or
    /// if `horizon` is negative or non-finite. The rate function itself is
    /// not inspected here; see the type-level note on the dominance bound.
    pub fn new(rate_fn: F, rate_max: f64, horizon: f64) -> SimResult<Self> {
        if !rate_max.is_finite() || rate_max <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "rate_max",
                format!("must be positive and finite, got {}", rate_max),
            ));
        }
        let candidates = HomogeneousProcess::new(rate_max, horizon)?;
        Ok(Self {
            rate_fn,
            candidates,
        })
    }

    /// The dominance bound used as the candidate rate.
    #[inline]
    pub fn rate_max(&self) -> f64 {
        self.candidates.rate()
    }

    /// The generation horizon.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.candidates.horizon()
    }

    /// Generates one arrival sequence.
    ///
    /// The full candidate sequence is drawn first, then one acceptance
    /// uniform per candidate, in time order. With a constant rate function
    /// equal to `rate_max` every candidate is accepted and the output
    /// matches the homogeneous process draw for draw.
    pub fn generate(&self, source: &mut RandomSource) -> ArrivalSequence {
        let candidates = self.candidates.generate(source);
        let rate_max = self.candidates.rate();

        let mut accepted = Vec::new();
        for &t in candidates.times() {
            if source.uniform_01() < self.rate_fn.rate(t) / rate_max {
                accepted.push(t);
            }
        }
        ArrivalSequence::new(accepted, self.candidates.horizon())
    }

    /// Samples the rate function on a uniform grid of `samples + 1` points
    /// over `[0, horizon]` and reports a violated dominance bound.
    ///
    /// A passing check is necessary but not sufficient: a rate function can
    /// spike between grid points. Never invoked implicitly.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `samples` is zero, or if any sampled rate is
    /// negative, non-finite, or above `rate_max`.
    pub fn check_bound(&self, samples: usize) -> SimResult<()> {
        if samples == 0 {
            return Err(SimulationError::invalid_parameter(
                "samples",
                "must be at least 1",
            ));
        }
        let horizon = self.candidates.horizon();
        let rate_max = self.candidates.rate();
        for i in 0..=samples {
            let t = horizon * i as f64 / samples as f64;
            let rate = self.rate_fn.rate(t);
            if !rate.is_finite() || rate < 0.0 {
                return Err(SimulationError::invalid_parameter(
                    "rate_fn",
                    format!("returned {} at t = {}; rates must be non-negative and finite", rate, t),
                ));
            }
            if rate > rate_max {
                return Err(SimulationError::invalid_parameter(
                    "rate_fn",
                    format!("returned {} at t = {}, above the bound {}", rate, t, rate_max),
                ));
            }
        }
        Ok(())
    }
}

impl<F> fmt::Debug for ThinningProcess<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThinningProcess")
            .field("rate_max", &self.candidates.rate())
            .field("horizon", &self.candidates.horizon())
            .finish_non_exhaustive()
    }
}
