//! # Stochsim Monte Carlo (Estimators)
//!
//! Flat loop-and-accumulate Monte Carlo estimators over a caller-supplied
//! [`RandomSource`](stochsim_core::RandomSource).
//!
//! This crate provides:
//! - [`estimate_pi`]: geometric probability of a uniform point in the unit
//!   disc
//! - [`estimate_mean`]: sample mean of an arbitrary distribution
//! - [`birthday_collision_probability`]: duplicate probability among
//!   uniform draws
//! - [`standardized_sample_means`]: central-limit demonstration samples
//!
//! ## Design Principles
//!
//! - **Point estimates only**: no interval or convergence machinery; the
//!   sample count is the caller's accuracy control
//! - **Validate then accumulate**: parameters are rejected with
//!   [`SimulationError`](stochsim_core::SimulationError) before the first
//!   draw

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod birthday;
pub mod geometry;
pub mod moments;

// Re-export the estimators
pub use birthday::birthday_collision_probability;
pub use geometry::estimate_pi;
pub use moments::{estimate_mean, standardized_sample_means};
