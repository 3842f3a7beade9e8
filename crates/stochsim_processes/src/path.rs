//! Owned value types produced by the generators.
//!
//! Every generation call materialises one of these in full and hands it to
//! the caller; nothing in this crate mutates a path after construction.
//! Fields are private so the generator invariants (ordering, lengths,
//! starting values) cannot be broken from outside.

/// Strictly increasing arrival times of a point process on `[0, horizon]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArrivalSequence {
    times: Vec<f64>,
    horizon: f64,
}

impl ArrivalSequence {
    pub(crate) fn new(times: Vec<f64>, horizon: f64) -> Self {
        Self { times, horizon }
    }

    /// The arrival times in increasing order.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The horizon the sequence was generated over.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Number of arrivals.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether no arrival fell within the horizon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Consumes the sequence, returning the raw arrival times.
    pub fn into_times(self) -> Vec<f64> {
        self.times
    }
}

/// Cumulative jump totals of a compound process as `(time, cumulative)`
/// pairs.
///
/// Times are strictly increasing; cumulative values are the prefix sums of
/// the drawn jumps and need not be monotone.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompoundPath {
    points: Vec<(f64, f64)>,
}

impl CompoundPath {
    pub(crate) fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// The `(time, cumulative)` pairs in time order.
    #[inline]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Number of jumps, equal to the underlying arrival count.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no jump occurred within the horizon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The cumulative total after the last jump, if any jump occurred.
    pub fn final_value(&self) -> Option<f64> {
        self.points.last().map(|&(_, total)| total)
    }

    /// Consumes the path, returning the raw `(time, cumulative)` pairs.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

/// State indices visited by a discrete-time Markov chain.
///
/// Always holds `steps + 1` entries; entry 0 is the initial state supplied
/// to the generator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChainPath {
    states: Vec<usize>,
}

impl ChainPath {
    pub(crate) fn new(states: Vec<usize>) -> Self {
        debug_assert!(!states.is_empty());
        Self { states }
    }

    /// The visited states, initial state first.
    #[inline]
    pub fn states(&self) -> &[usize] {
        &self.states
    }

    /// Number of recorded states (`steps + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`; the initial state is recorded even for zero steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The state occupied after the last step.
    #[inline]
    pub fn final_state(&self) -> usize {
        self.states[self.states.len() - 1]
    }

    /// Consumes the path, returning the raw state indices.
    pub fn into_states(self) -> Vec<usize> {
        self.states
    }
}

/// Integer positions visited by a ±1 random walk.
///
/// Always holds `steps + 1` entries; entry 0 is the origin and consecutive
/// entries differ by exactly one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WalkPath {
    positions: Vec<i64>,
}

impl WalkPath {
    pub(crate) fn new(positions: Vec<i64>) -> Self {
        debug_assert!(!positions.is_empty());
        Self { positions }
    }

    /// The visited positions, origin first.
    #[inline]
    pub fn positions(&self) -> &[i64] {
        &self.positions
    }

    /// Number of recorded positions (`steps + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`; the origin is recorded even for zero steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The position reached after the last step.
    #[inline]
    pub fn final_position(&self) -> i64 {
        self.positions[self.positions.len() - 1]
    }

    /// Consumes the path, returning the raw positions.
    pub fn into_positions(self) -> Vec<i64> {
        self.positions
    }
}

/// A standard Brownian path sampled on the uniform grid
/// `t_i = i · horizon / steps`.
///
/// Positions start at zero; increments between grid points are independent
/// `N(0, dt)` draws.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BrownianPath {
    times: Vec<f64>,
    positions: Vec<f64>,
}

impl BrownianPath {
    pub(crate) fn new(times: Vec<f64>, positions: Vec<f64>) -> Self {
        debug_assert_eq!(times.len(), positions.len());
        debug_assert!(!times.is_empty());
        Self { times, positions }
    }

    /// The uniform time grid, starting at zero.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The path positions on the grid, starting at zero.
    #[inline]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Number of grid points (`steps + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`; the origin is recorded even for a single step.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The position reached at the end of the horizon.
    #[inline]
    pub fn final_position(&self) -> f64 {
        self.positions[self.positions.len() - 1]
    }
}
