//! Random number generation for stochastic-process simulation.
//!
//! This module provides [`RandomSource`], the seeded engine wrapper that is
//! threaded through every generator in the workspace. One source instance
//! carries one underlying engine; sharing it across threads is not
//! supported, and parallel simulations must each own their own source.

mod source;

pub use source::RandomSource;
