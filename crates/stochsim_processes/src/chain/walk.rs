//! Simple ±1 random walk generation.

use rand::distributions::Bernoulli;
use stochsim_core::{RandomSource, SimResult, SimulationError};

use crate::path::WalkPath;

/// Simple random walk on the integers, starting at the origin.
///
/// Each step moves up by one with probability `up_probability` and down by
/// one otherwise, via independent Bernoulli draws.
///
/// # Examples
///
/// ```rust
/// use stochsim_core::RandomSource;
/// use stochsim_processes::chain::RandomWalk;
///
/// let walk = RandomWalk::new(0.5).unwrap();
/// let path = walk.generate(100, &mut RandomSource::from_seed(12345));
///
/// assert_eq!(path.len(), 101);
/// assert_eq!(path.positions()[0], 0);
/// assert!(path.positions().windows(2).all(|w| (w[1] - w[0]).abs() == 1));
/// ```
#[derive(Clone, Debug)]
pub struct RandomWalk {
    up_probability: f64,
    step: Bernoulli,
}

impl RandomWalk {
    /// Creates a walk stepping up with the given probability.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `up_probability` lies outside `[0, 1]` or is
    /// non-finite.
    pub fn new(up_probability: f64) -> SimResult<Self> {
        let step = Bernoulli::new(up_probability).map_err(|_| {
            SimulationError::invalid_parameter(
                "up_probability",
                format!("must lie in [0, 1], got {}", up_probability),
            )
        })?;
        Ok(Self {
            up_probability,
            step,
        })
    }

    /// The probability of an upward step.
    #[inline]
    pub fn up_probability(&self) -> f64 {
        self.up_probability
    }

    /// Generates a position path of length `steps + 1` starting at zero.
    pub fn generate(&self, steps: usize, source: &mut RandomSource) -> WalkPath {
        let mut positions = Vec::with_capacity(steps + 1);
        let mut position = 0i64;
        positions.push(position);
        for _ in 0..steps {
            position += if source.sample(&self.step) { 1 } else { -1 };
            positions.push(position);
        }
        WalkPath::new(positions)
    }
}
