//! Homogeneous Poisson process generation.
//!
//! Arrivals of a constant-rate Poisson process are separated by independent
//! exponential gaps:
//! ```text
//! t_1 = G_1,  t_k = t_{k-1} + G_k,  G_k ~ Exp(rate)
//! ```
//! The generator accumulates gaps until the clock overshoots the horizon
//! and discards that first overshoot, so every reported arrival lies inside
//! `[0, horizon]` and the expected count is `rate × horizon`.

use rand_distr::Exp;
use stochsim_core::{RandomSource, SimResult, SimulationError};

use crate::path::ArrivalSequence;

/// Constant-rate Poisson arrival generator over a bounded horizon.
///
/// Parameters are validated once at construction; [`generate`] itself
/// cannot fail.
///
/// [`generate`]: Self::generate
///
/// # Examples
///
/// ```rust
/// use stochsim_core::RandomSource;
/// use stochsim_processes::point::HomogeneousProcess;
///
/// let mut source = RandomSource::from_seed(12345);
/// let process = HomogeneousProcess::new(1.0, 10.0).unwrap();
/// let arrivals = process.generate(&mut source);
///
/// assert!(arrivals.times().windows(2).all(|w| w[0] < w[1]));
/// assert!(arrivals.times().iter().all(|&t| t <= 10.0));
/// ```
#[derive(Clone, Debug)]
pub struct HomogeneousProcess {
    rate: f64,
    horizon: f64,
    gaps: Exp<f64>,
}

impl HomogeneousProcess {
    /// Creates a generator with the given arrival rate and horizon.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `rate` is non-positive or non-finite, or if
    /// `horizon` is negative or non-finite.
    pub fn new(rate: f64, horizon: f64) -> SimResult<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "rate",
                format!("must be positive and finite, got {}", rate),
            ));
        }
        if !horizon.is_finite() || horizon < 0.0 {
            return Err(SimulationError::invalid_parameter(
                "horizon",
                format!("must be non-negative and finite, got {}", horizon),
            ));
        }
        let gaps = Exp::new(rate).map_err(|_| {
            SimulationError::invalid_parameter(
                "rate",
                format!("must be positive and finite, got {}", rate),
            )
        })?;
        Ok(Self {
            rate,
            horizon,
            gaps,
        })
    }

    /// The constant arrival rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// The generation horizon.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Generates one arrival sequence.
    ///
    /// A zero horizon yields an empty sequence.
    pub fn generate(&self, source: &mut RandomSource) -> ArrivalSequence {
        let mut times = Vec::new();
        let mut clock = source.sample(&self.gaps);
        while clock <= self.horizon {
            times.push(clock);
            clock += source.sample(&self.gaps);
        }
        ArrivalSequence::new(times, self.horizon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_rate() {
        assert!(HomogeneousProcess::new(0.0, 10.0).is_err());
        assert!(HomogeneousProcess::new(-1.0, 10.0).is_err());
        assert!(HomogeneousProcess::new(f64::NAN, 10.0).is_err());
        assert!(HomogeneousProcess::new(f64::INFINITY, 10.0).is_err());
    }

    #[test]
    fn test_new_rejects_bad_horizon() {
        assert!(HomogeneousProcess::new(1.0, -0.1).is_err());
        assert!(HomogeneousProcess::new(1.0, f64::NAN).is_err());
        assert!(HomogeneousProcess::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_names_offending_parameter() {
        let err = HomogeneousProcess::new(-1.0, 10.0).unwrap_err();
        assert_eq!(err.parameter_name(), "rate");
        let err = HomogeneousProcess::new(1.0, -1.0).unwrap_err();
        assert_eq!(err.parameter_name(), "horizon");
    }

    #[test]
    fn test_zero_horizon_yields_empty_sequence() {
        let mut source = RandomSource::from_seed(42);
        let process = HomogeneousProcess::new(5.0, 0.0).unwrap();
        assert!(process.generate(&mut source).is_empty());
    }

    #[test]
    fn test_arrivals_strictly_increasing_within_horizon() {
        let mut source = RandomSource::from_seed(42);
        let process = HomogeneousProcess::new(2.0, 50.0).unwrap();
        let arrivals = process.generate(&mut source);

        assert!(!arrivals.is_empty());
        assert!(arrivals.times().windows(2).all(|w| w[0] < w[1]));
        assert!(arrivals.times().iter().all(|&t| t > 0.0 && t <= 50.0));
        assert_eq!(arrivals.horizon(), 50.0);
    }

    #[test]
    fn test_same_seed_reproduces_sequence() {
        let process = HomogeneousProcess::new(1.5, 20.0).unwrap();
        let a = process.generate(&mut RandomSource::from_seed(7));
        let b = process.generate(&mut RandomSource::from_seed(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let process = HomogeneousProcess::new(1.5, 20.0).unwrap();
        let a = process.generate(&mut RandomSource::from_seed(7));
        let b = process.generate(&mut RandomSource::from_seed(8));
        assert_ne!(a, b);
    }

    #[test]
    fn test_accessors_round_trip() {
        let process = HomogeneousProcess::new(3.0, 12.5).unwrap();
        assert_eq!(process.rate(), 3.0);
        assert_eq!(process.horizon(), 12.5);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_arrivals_increasing_and_bounded(
                rate in 0.1..20.0f64,
                horizon in 0.0..50.0f64,
                seed in any::<u64>(),
            ) {
                let process = HomogeneousProcess::new(rate, horizon).unwrap();
                let arrivals = process.generate(&mut RandomSource::from_seed(seed));

                prop_assert!(arrivals.times().windows(2).all(|w| w[0] < w[1]));
                prop_assert!(arrivals.times().iter().all(|&t| t > 0.0 && t <= horizon));
            }
        }
    }
}
