//! Error types for simulation parameter validation.
//!
//! Every generator in the workspace validates its parameters before drawing
//! anything; the single failure mode is [`SimulationError::InvalidParameter`].

use thiserror::Error;

/// Convenience alias for results carrying a [`SimulationError`].
pub type SimResult<T> = Result<T, SimulationError>;

/// Validation error raised synchronously before any generation work.
///
/// A failed call produces no sequence at all; there are no retries and no
/// partial results.
///
/// # Examples
/// ```
/// use stochsim_core::SimulationError;
///
/// let err = SimulationError::invalid_parameter("rate", "must be positive, got -1");
/// assert_eq!(
///     format!("{}", err),
///     "invalid parameter `rate`: must be positive, got -1"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SimulationError {
    /// A precondition on a caller-supplied parameter was violated.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the offending signature.
        name: &'static str,
        /// Description of the violated precondition.
        reason: String,
    },
}

impl SimulationError {
    /// Creates a [`SimulationError::InvalidParameter`] for the named parameter.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending parameter.
    pub fn parameter_name(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => name,
        }
    }
}
