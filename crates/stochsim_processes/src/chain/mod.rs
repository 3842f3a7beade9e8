//! Discrete-time chains: Markov chains and simple random walks.
//!
//! Both generators step a state forward with one independent draw per
//! step; a random walk is the special case of a chain on the integers with
//! unit steps.

pub mod markov;
pub mod walk;

// Re-export the generators and the validation tolerance
pub use markov::{MarkovChain, ROW_SUM_TOLERANCE};
pub use walk::RandomWalk;
