//! Continuous-path diffusion generators.

pub mod brownian;

// Re-export the generator
pub use brownian::BrownianMotion;
