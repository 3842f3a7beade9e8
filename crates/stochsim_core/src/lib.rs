//! # Stochsim Core (Foundation)
//!
//! Seeded random source and shared error types for the stochsim workspace.
//!
//! This crate provides:
//! - [`RandomSource`]: a reproducible, seeded engine wrapper exposing the
//!   derived-distribution draws every generator in the workspace consumes
//! - [`SimulationError`]: the single validation error kind raised before
//!   any generation work begins
//!
//! ## Design Principles
//!
//! - **Explicit randomness**: no global or thread-local engine state; every
//!   generator takes a `&mut RandomSource` so runs are reproducible and
//!   parallel callers own independent sources
//! - **Validate, then draw**: malformed parameters fail immediately with
//!   [`SimulationError::InvalidParameter`]; a failed call draws nothing

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod rng;

pub use error::{SimResult, SimulationError};
pub use rng::RandomSource;
