//! Geometric probability estimation.

use rand_distr::Uniform;
use stochsim_core::{RandomSource, SimResult, SimulationError};

/// Estimates π from the fraction of uniform points in `[-1, 1]²` that land
/// inside the unit disc.
///
/// The disc covers π/4 of the square, so four times the hit fraction
/// estimates π. The standard error shrinks as `1/√samples`.
///
/// # Errors
///
/// `InvalidParameter` if `samples` is zero.
///
/// # Examples
///
/// ```rust
/// use stochsim_core::RandomSource;
/// use stochsim_montecarlo::estimate_pi;
///
/// let mut source = RandomSource::from_seed(12345);
/// let estimate = estimate_pi(100_000, &mut source).unwrap();
/// assert!((estimate - std::f64::consts::PI).abs() < 0.1);
/// ```
pub fn estimate_pi(samples: usize, source: &mut RandomSource) -> SimResult<f64> {
    if samples == 0 {
        return Err(SimulationError::invalid_parameter(
            "samples",
            "must be at least 1",
        ));
    }

    let coordinate = Uniform::new(-1.0f64, 1.0);
    let mut hits = 0usize;
    for _ in 0..samples {
        let x = source.sample(&coordinate);
        let y = source.sample(&coordinate);
        if x * x + y * y <= 1.0 {
            hits += 1;
        }
    }
    Ok(4.0 * hits as f64 / samples as f64)
}
