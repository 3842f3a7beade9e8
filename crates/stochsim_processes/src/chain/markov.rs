//! Discrete-time Markov chain generation from a transition matrix.

use rand::distributions::WeightedIndex;
use stochsim_core::{RandomSource, SimResult, SimulationError};

use crate::path::ChainPath;

/// Tolerance allowed between each transition-matrix row sum and one.
pub const ROW_SUM_TOLERANCE: f64 = 1e-9;

/// Discrete-time Markov chain over states `0..n`.
///
/// The transition matrix is validated once and compiled into per-row
/// categorical samplers at construction, so stepping never re-validates.
/// Each step draws the next state from the current state's row with an
/// independent draw; together with the per-row samplers this gives the
/// Markov property by construction.
///
/// # Examples
///
/// ```rust
/// use stochsim_core::RandomSource;
/// use stochsim_processes::chain::MarkovChain;
///
/// let chain = MarkovChain::new(vec![
///     vec![0.2, 0.3, 0.5],
///     vec![0.0, 0.3, 0.7],
///     vec![0.5, 0.4, 0.1],
/// ])
/// .unwrap();
///
/// let mut source = RandomSource::from_seed(12345);
/// let path = chain.generate(0, 20, &mut source).unwrap();
///
/// assert_eq!(path.len(), 21);
/// assert_eq!(path.states()[0], 0);
/// assert!(path.states().iter().all(|&s| s < 3));
/// ```
#[derive(Clone, Debug)]
pub struct MarkovChain {
    rows: Vec<Vec<f64>>,
    samplers: Vec<WeightedIndex<f64>>,
}

impl MarkovChain {
    /// Creates a chain from a square row-stochastic transition matrix.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the matrix is empty or not square, any entry
    /// is negative or non-finite, or any row sum deviates from one by more
    /// than [`ROW_SUM_TOLERANCE`].
    pub fn new(rows: Vec<Vec<f64>>) -> SimResult<Self> {
        if rows.is_empty() {
            return Err(SimulationError::invalid_parameter(
                "rows",
                "transition matrix must not be empty",
            ));
        }
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(SimulationError::invalid_parameter(
                    "rows",
                    format!("row {} has {} entries, expected {}", i, row.len(), n),
                ));
            }
            if let Some(p) = row.iter().find(|p| !p.is_finite() || **p < 0.0) {
                return Err(SimulationError::invalid_parameter(
                    "rows",
                    format!("row {} contains invalid probability {}", i, p),
                ));
            }
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                return Err(SimulationError::invalid_parameter(
                    "rows",
                    format!("row {} sums to {}, expected 1", i, sum),
                ));
            }
        }

        let samplers = rows
            .iter()
            .map(|row| {
                WeightedIndex::new(row).map_err(|_| {
                    SimulationError::invalid_parameter("rows", "each row needs a positive weight")
                })
            })
            .collect::<SimResult<Vec<_>>>()?;

        Ok(Self { rows, samplers })
    }

    /// Number of states.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.rows.len()
    }

    /// The probability of stepping from `from` to `to`, if both states
    /// exist.
    pub fn transition_probability(&self, from: usize, to: usize) -> Option<f64> {
        self.rows.get(from)?.get(to).copied()
    }

    /// Generates a state path of length `steps + 1` starting at
    /// `initial_state`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `initial_state` is not a valid state index.
    pub fn generate(
        &self,
        initial_state: usize,
        steps: usize,
        source: &mut RandomSource,
    ) -> SimResult<ChainPath> {
        if initial_state >= self.state_count() {
            return Err(SimulationError::invalid_parameter(
                "initial_state",
                format!(
                    "state {} does not exist in a {}-state chain",
                    initial_state,
                    self.state_count()
                ),
            ));
        }

        let mut states = Vec::with_capacity(steps + 1);
        states.push(initial_state);
        let mut current = initial_state;
        for _ in 0..steps {
            current = source.sample(&self.samplers[current]);
            states.push(current);
        }
        Ok(ChainPath::new(states))
    }
}
