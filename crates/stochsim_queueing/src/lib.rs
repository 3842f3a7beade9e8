//! # Stochsim Queueing (Discrete-Event Simulation)
//!
//! Event-driven simulations of service systems, built on the same
//! [`RandomSource`](stochsim_core::RandomSource) as the path generators.
//!
//! This crate provides:
//! - [`event::FutureEventSet`]: a time-ordered pending-event queue with
//!   processor-sharing departure rescaling
//! - [`processor_sharing::ProcessorSharingQueue`]: an M/M/1 queue under
//!   the processor-sharing discipline
//! - [`fluid::OnOffBuffer`]: a finite buffer fed by an on-off fluid source
//!
//! ## Design Principles
//!
//! - **Run-to-completion**: `simulate` consumes the clock up to the given
//!   horizon and returns a summary report; no streaming of events
//! - **Reports, not inference**: outputs are run-level averages and
//!   fractions; confidence intervals are a caller concern

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod event;
pub mod fluid;
pub mod processor_sharing;

// Re-export the simulators and their reports
pub use event::{Customer, Event, EventKind, FutureEventSet};
pub use fluid::{FluidReport, OnOffBuffer};
pub use processor_sharing::{ProcessorSharingQueue, QueueReport};
