//! Capability traits consumed by the point-process generators.

use stochsim_core::RandomSource;

/// An instantaneous arrival-rate function of elapsed time.
///
/// Implementations must return a non-negative, finite rate for every
/// `t >= 0`. The thinning generator additionally requires the rate to stay
/// below its configured bound over the whole horizon; see
/// [`ThinningProcess`](super::ThinningProcess) for that contract.
///
/// Any closure `Fn(f64) -> f64` implements this trait.
///
/// # Examples
///
/// ```rust
/// use stochsim_processes::point::RateFunction;
///
/// let ramp = |t: f64| 0.5 * t;
/// assert_eq!(ramp.rate(4.0), 2.0);
/// ```
pub trait RateFunction {
    /// Instantaneous rate at elapsed time `t`.
    fn rate(&self, t: f64) -> f64;
}

impl<F> RateFunction for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn rate(&self, t: f64) -> f64 {
        self(t)
    }
}

/// A stochastic source of jump magnitudes for compound processes.
///
/// Each call draws one magnitude. Draws must be independent of previous
/// calls and of the arrival times they end up attached to; any dependence
/// breaks the compound-process statistics.
///
/// Any closure `FnMut(&mut RandomSource) -> f64` implements this trait.
///
/// # Examples
///
/// ```rust
/// use stochsim_core::RandomSource;
/// use stochsim_processes::point::JumpGenerator;
///
/// let mut source = RandomSource::from_seed(7);
/// let mut unit_jumps = |s: &mut RandomSource| s.uniform_01();
/// let jump = unit_jumps.next_jump(&mut source);
/// assert!((0.0..1.0).contains(&jump));
/// ```
pub trait JumpGenerator {
    /// Draws the next jump magnitude.
    fn next_jump(&mut self, source: &mut RandomSource) -> f64;
}

impl<F> JumpGenerator for F
where
    F: FnMut(&mut RandomSource) -> f64,
{
    #[inline]
    fn next_jump(&mut self, source: &mut RandomSource) -> f64 {
        self(source)
    }
}
