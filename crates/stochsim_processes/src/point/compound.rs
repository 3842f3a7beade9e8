//! Compound Poisson process generation.
//!
//! A compound process attaches an independent random jump magnitude to
//! every arrival of a homogeneous Poisson process and accumulates them:
//! ```text
//! X(t) = Σ_{k : t_k ≤ t} J_k,   J_k i.i.d. from the jump generator
//! ```
//! The generated path records the running total at every arrival time.

use stochsim_core::{RandomSource, SimResult};

use super::homogeneous::HomogeneousProcess;
use super::traits::JumpGenerator;
use crate::path::CompoundPath;

/// Cumulative-jump path generator at constant-rate Poisson arrivals.
///
/// Arrivals are generated first, in full; one jump is then drawn per
/// arrival in increasing time order, so no jump is ever drawn for an
/// arrival past the horizon.
///
/// # Examples
///
/// ```rust
/// use stochsim_core::RandomSource;
/// use stochsim_processes::point::CompoundProcess;
///
/// let mut source = RandomSource::from_seed(12345);
/// let process = CompoundProcess::new(1.0, 10.0).unwrap();
/// let mut jumps = |s: &mut RandomSource| s.uniform_01();
///
/// let path = process.generate(&mut source, &mut jumps);
/// // Non-negative jumps make the cumulative total non-decreasing.
/// assert!(path.points().windows(2).all(|w| w[0].1 <= w[1].1));
/// ```
#[derive(Clone, Debug)]
pub struct CompoundProcess {
    arrivals: HomogeneousProcess,
}

impl CompoundProcess {
    /// Creates a generator with the given arrival rate and horizon.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` under the same conditions as
    /// [`HomogeneousProcess::new`].
    pub fn new(rate: f64, horizon: f64) -> SimResult<Self> {
        Ok(Self {
            arrivals: HomogeneousProcess::new(rate, horizon)?,
        })
    }

    /// The constant arrival rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.arrivals.rate()
    }

    /// The generation horizon.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.arrivals.horizon()
    }

    /// Generates one cumulative path, drawing one jump per arrival.
    ///
    /// The path length equals the arrival count; an arrival-free horizon
    /// yields an empty path without consuming any jump draw.
    pub fn generate(
        &self,
        source: &mut RandomSource,
        jumps: &mut impl JumpGenerator,
    ) -> CompoundPath {
        let arrivals = self.arrivals.generate(source);

        let mut points = Vec::with_capacity(arrivals.len());
        let mut total = 0.0;
        for &t in arrivals.times() {
            total += jumps.next_jump(source);
            points.push((t, total));
        }
        CompoundPath::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_parameters() {
        assert!(CompoundProcess::new(0.0, 10.0).is_err());
        assert!(CompoundProcess::new(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_cumulative_values_are_prefix_sums() {
        let mut source = RandomSource::from_seed(42);
        let process = CompoundProcess::new(2.0, 20.0).unwrap();

        // Record each drawn jump on the side and rebuild the prefix sums.
        let mut drawn = Vec::new();
        let mut jumps = |s: &mut RandomSource| {
            let j = s.standard_normal();
            drawn.push(j);
            j
        };
        let path = process.generate(&mut source, &mut jumps);

        assert_eq!(path.len(), drawn.len());
        let mut total = 0.0;
        for (&(_, cumulative), &jump) in path.points().iter().zip(&drawn) {
            total += jump;
            assert!((cumulative - total).abs() < 1e-12);
        }
    }

    #[test]
    fn test_unit_jumps_count_arrivals() {
        let process = CompoundProcess::new(1.5, 30.0).unwrap();
        let mut unit = |_: &mut RandomSource| 1.0;
        let path = process.generate(&mut RandomSource::from_seed(7), &mut unit);

        match path.final_value() {
            Some(total) => assert_eq!(total, path.len() as f64),
            None => assert!(path.is_empty()),
        }
    }

    #[test]
    fn test_times_match_homogeneous_arrivals() {
        // The same seed must place jumps exactly on the homogeneous
        // arrival times, since all arrivals are drawn before any jump.
        let rate = 1.0;
        let horizon = 15.0;
        let compound = CompoundProcess::new(rate, horizon).unwrap();
        let homogeneous = HomogeneousProcess::new(rate, horizon).unwrap();

        let mut constant = |_: &mut RandomSource| 0.5;
        let path = compound.generate(&mut RandomSource::from_seed(11), &mut constant);
        let arrivals = homogeneous.generate(&mut RandomSource::from_seed(11));

        let times: Vec<f64> = path.points().iter().map(|&(t, _)| t).collect();
        assert_eq!(times, arrivals.times());
    }

    #[test]
    fn test_zero_horizon_draws_no_jump() {
        let process = CompoundProcess::new(5.0, 0.0).unwrap();
        let mut calls = 0u32;
        let mut counting = |s: &mut RandomSource| {
            calls += 1;
            s.uniform_01()
        };
        let path = process.generate(&mut RandomSource::from_seed(3), &mut counting);

        assert!(path.is_empty());
        drop(counting);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_same_seed_reproduces_path() {
        let process = CompoundProcess::new(1.0, 25.0).unwrap();
        let a = process.generate(&mut RandomSource::from_seed(5), &mut |s: &mut RandomSource| {
            s.uniform_01()
        });
        let b = process.generate(&mut RandomSource::from_seed(5), &mut |s: &mut RandomSource| {
            s.uniform_01()
        });
        assert_eq!(a, b);
    }
}
