//! Sample-mean estimation and central-limit demonstration samples.

use rand_distr::Distribution;
use stochsim_core::{RandomSource, SimResult, SimulationError};

/// Estimates the mean of a distribution by plain sample averaging.
///
/// # Errors
///
/// `InvalidParameter` if `samples` is zero.
///
/// # Examples
///
/// ```rust
/// use rand_distr::Exp;
/// use stochsim_core::RandomSource;
/// use stochsim_montecarlo::estimate_mean;
///
/// let mut source = RandomSource::from_seed(12345);
/// let gaps = Exp::new(10.0).unwrap();
/// let mean = estimate_mean(&gaps, 50_000, &mut source).unwrap();
/// assert!((mean - 0.1).abs() < 0.01);
/// ```
pub fn estimate_mean<D: Distribution<f64>>(
    dist: &D,
    samples: usize,
    source: &mut RandomSource,
) -> SimResult<f64> {
    if samples == 0 {
        return Err(SimulationError::invalid_parameter(
            "samples",
            "must be at least 1",
        ));
    }

    let mut sum = 0.0;
    for _ in 0..samples {
        sum += source.sample(dist);
    }
    Ok(sum / samples as f64)
}

/// Draws `runs` standardized sample means `√n · (x̄ − mean) / std_dev`.
///
/// Each run averages `sample_size` draws from `dist` and standardises the
/// result with the distribution's true mean and standard deviation. By the
/// central limit theorem the returned values approach a standard normal as
/// `sample_size` grows, whatever the shape of `dist`.
///
/// # Errors
///
/// `InvalidParameter` if `sample_size` or `runs` is zero, `mean` is
/// non-finite, or `std_dev` is non-positive or non-finite.
pub fn standardized_sample_means<D: Distribution<f64>>(
    dist: &D,
    mean: f64,
    std_dev: f64,
    sample_size: usize,
    runs: usize,
    source: &mut RandomSource,
) -> SimResult<Vec<f64>> {
    if !mean.is_finite() {
        return Err(SimulationError::invalid_parameter(
            "mean",
            format!("must be finite, got {}", mean),
        ));
    }
    if !std_dev.is_finite() || std_dev <= 0.0 {
        return Err(SimulationError::invalid_parameter(
            "std_dev",
            format!("must be positive and finite, got {}", std_dev),
        ));
    }
    if sample_size == 0 {
        return Err(SimulationError::invalid_parameter(
            "sample_size",
            "must be at least 1",
        ));
    }
    if runs == 0 {
        return Err(SimulationError::invalid_parameter(
            "runs",
            "must be at least 1",
        ));
    }

    let scale = (sample_size as f64).sqrt() / std_dev;
    let mut values = Vec::with_capacity(runs);
    for _ in 0..runs {
        let mut sum = 0.0;
        for _ in 0..sample_size {
            sum += source.sample(dist);
        }
        let sample_mean = sum / sample_size as f64;
        values.push(scale * (sample_mean - mean));
    }
    Ok(values)
}
