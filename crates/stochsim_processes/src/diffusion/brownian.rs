//! Standard Brownian motion on a uniform time grid.
//!
//! Positions follow
//! ```text
//! W(0) = 0,   W(t_{i+1}) = W(t_i) + ΔW_i,   ΔW_i ~ N(0, dt)
//! ```
//! on the grid `t_i = i · horizon / steps` with `dt = horizon / steps`.

use rand_distr::Normal;
use stochsim_core::{RandomSource, SimResult, SimulationError};

use crate::path::BrownianPath;

/// Standard Brownian path generator over a bounded horizon.
///
/// The increment distribution `N(0, √dt)` is built once at construction,
/// so [`generate`](Self::generate) cannot fail.
///
/// # Examples
///
/// ```rust
/// use stochsim_core::RandomSource;
/// use stochsim_processes::diffusion::BrownianMotion;
///
/// let motion = BrownianMotion::new(8.0, 1_000).unwrap();
/// let path = motion.generate(&mut RandomSource::from_seed(12345));
///
/// assert_eq!(path.len(), 1_001);
/// assert_eq!(path.positions()[0], 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct BrownianMotion {
    horizon: f64,
    steps: usize,
    increments: Normal<f64>,
}

impl BrownianMotion {
    /// Creates a generator over `[0, horizon]` with `steps` uniform
    /// increments.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `horizon` is non-positive or non-finite, or
    /// `steps` is zero.
    pub fn new(horizon: f64, steps: usize) -> SimResult<Self> {
        if !horizon.is_finite() || horizon <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "horizon",
                format!("must be positive and finite, got {}", horizon),
            ));
        }
        if steps == 0 {
            return Err(SimulationError::invalid_parameter(
                "steps",
                "must be at least 1",
            ));
        }
        let dt = horizon / steps as f64;
        let increments = Normal::new(0.0, dt.sqrt()).map_err(|_| {
            SimulationError::invalid_parameter(
                "horizon",
                format!("produces an invalid step variance, got horizon {}", horizon),
            )
        })?;
        Ok(Self {
            horizon,
            steps,
            increments,
        })
    }

    /// The generation horizon.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Number of increments per path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The grid spacing `horizon / steps`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.horizon / self.steps as f64
    }

    /// Generates one path of `steps + 1` grid points starting at zero.
    pub fn generate(&self, source: &mut RandomSource) -> BrownianPath {
        let dt = self.dt();
        let mut times = Vec::with_capacity(self.steps + 1);
        let mut positions = Vec::with_capacity(self.steps + 1);
        times.push(0.0);
        positions.push(0.0);

        let mut position = 0.0;
        for i in 1..=self.steps {
            position += source.sample(&self.increments);
            times.push(i as f64 * dt);
            positions.push(position);
        }
        BrownianPath::new(times, positions)
    }

    /// Generates a planar Brownian motion as two independent coordinate
    /// paths on the same grid, returned as `(x, y)`.
    pub fn generate_2d(&self, source: &mut RandomSource) -> (BrownianPath, BrownianPath) {
        (self.generate(source), self.generate(source))
    }
}
