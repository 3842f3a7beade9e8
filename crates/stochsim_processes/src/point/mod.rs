//! Poisson point processes: homogeneous, thinned, and compound.
//!
//! The homogeneous generator is the engine for the other two: thinning
//! over-samples it at a dominating rate and rejects, while the compound
//! generator folds independent jump magnitudes over its arrivals.
//!
//! ## Example
//!
//! ```rust
//! use stochsim_core::RandomSource;
//! use stochsim_processes::point::{HomogeneousProcess, ThinningProcess};
//!
//! let mut source = RandomSource::from_seed(12345);
//!
//! let steady = HomogeneousProcess::new(1.0, 10.0).unwrap();
//! let arrivals = steady.generate(&mut source);
//! assert!(arrivals.times().iter().all(|&t| t <= 10.0));
//!
//! let bursty = ThinningProcess::new(|t: f64| (t / 10.0).min(1.0) * 4.0, 4.0, 10.0).unwrap();
//! let arrivals = bursty.generate(&mut source);
//! assert!(arrivals.times().windows(2).all(|w| w[0] < w[1]));
//! ```

pub mod compound;
pub mod homogeneous;
pub mod thinning;
pub mod traits;

// Re-export the generators
pub use compound::CompoundProcess;
pub use homogeneous::HomogeneousProcess;
pub use thinning::ThinningProcess;

// Re-export the capability traits
pub use traits::{JumpGenerator, RateFunction};
