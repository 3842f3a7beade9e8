//! # Stochsim Processes (Path Generators)
//!
//! Sample-path generators for point processes, discrete-time chains, and
//! Brownian diffusion.
//!
//! This crate provides:
//! - [`point::HomogeneousProcess`]: constant-rate Poisson arrivals over a
//!   bounded horizon
//! - [`point::ThinningProcess`]: time-varying arrival rates via
//!   Lewis-Shedler thinning
//! - [`point::CompoundProcess`]: cumulative jump paths at Poisson arrival
//!   times
//! - [`chain::MarkovChain`] / [`chain::RandomWalk`]: discrete-time state
//!   sequences
//! - [`diffusion::BrownianMotion`]: standard Brownian paths on a uniform
//!   time grid
//!
//! ## Design Principles
//!
//! - **Explicit randomness**: every generator draws from a caller-supplied
//!   [`RandomSource`](stochsim_core::RandomSource); no global engine state
//! - **Validate at construction**: parameters are checked once in `new`, so
//!   the generation loops themselves cannot fail
//! - **Owned outputs**: each generation call returns a fully materialised,
//!   immutable path value from [`path`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod chain;
pub mod diffusion;
pub mod path;
pub mod point;
