//! M/M/1 queue simulation under the processor-sharing discipline.
//!
//! All customers present share the server equally: with `n` in the system
//! each receives rate `μ/n`, so a pending departure stretches or shrinks
//! whenever `n` changes. The event loop applies that rescaling through
//! [`FutureEventSet::rescale_departures`] before scheduling new work.

use rand_distr::Exp;
use stochsim_core::{RandomSource, SimResult, SimulationError};

use crate::event::{Customer, Event, EventKind, FutureEventSet};

/// Run-level summary of one processor-sharing simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QueueReport {
    mean_queue_length: f64,
    mean_sojourn_time: f64,
    customers_served: u64,
}

impl QueueReport {
    /// Time-weighted average number of customers in the system.
    #[inline]
    pub fn mean_queue_length(&self) -> f64 {
        self.mean_queue_length
    }

    /// Average time served customers spent in the system.
    #[inline]
    pub fn mean_sojourn_time(&self) -> f64 {
        self.mean_sojourn_time
    }

    /// Number of customers whose service completed within the run.
    #[inline]
    pub fn customers_served(&self) -> u64 {
        self.customers_served
    }
}

/// M/M/1 processor-sharing queue simulator.
///
/// Arrivals are Poisson at `arrival_rate`; service requirements are
/// exponential with mean `1 / service_rate`. A customer arriving to find
/// `n` others is initially scheduled to depart after
/// `service_draw × (n + 1)`, and every queue-length change rescales the
/// pending departures.
///
/// # Examples
///
/// ```rust
/// use stochsim_core::RandomSource;
/// use stochsim_queueing::ProcessorSharingQueue;
///
/// let queue = ProcessorSharingQueue::new(0.7, 0.9).unwrap();
/// let mut source = RandomSource::from_seed(12345);
/// let report = queue.simulate(10_000.0, &mut source).unwrap();
///
/// assert!(report.mean_queue_length() > 0.0);
/// assert!(report.customers_served() > 0);
/// ```
#[derive(Clone, Debug)]
pub struct ProcessorSharingQueue {
    arrival_rate: f64,
    service_rate: f64,
    inter_arrivals: Exp<f64>,
    services: Exp<f64>,
}

impl ProcessorSharingQueue {
    /// Creates a simulator with the given arrival and service rates.
    ///
    /// Stability (`arrival_rate < service_rate`) is not required; an
    /// overloaded queue simply grows over the run.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if either rate is non-positive or non-finite.
    pub fn new(arrival_rate: f64, service_rate: f64) -> SimResult<Self> {
        if !arrival_rate.is_finite() || arrival_rate <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "arrival_rate",
                format!("must be positive and finite, got {}", arrival_rate),
            ));
        }
        if !service_rate.is_finite() || service_rate <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "service_rate",
                format!("must be positive and finite, got {}", service_rate),
            ));
        }
        let inter_arrivals = Exp::new(arrival_rate).map_err(|_| {
            SimulationError::invalid_parameter(
                "arrival_rate",
                format!("must be positive and finite, got {}", arrival_rate),
            )
        })?;
        let services = Exp::new(service_rate).map_err(|_| {
            SimulationError::invalid_parameter(
                "service_rate",
                format!("must be positive and finite, got {}", service_rate),
            )
        })?;
        Ok(Self {
            arrival_rate,
            service_rate,
            inter_arrivals,
            services,
        })
    }

    /// The Poisson arrival rate.
    #[inline]
    pub fn arrival_rate(&self) -> f64 {
        self.arrival_rate
    }

    /// The exponential service rate.
    #[inline]
    pub fn service_rate(&self) -> f64 {
        self.service_rate
    }

    /// The offered load `arrival_rate / service_rate`.
    #[inline]
    pub fn utilisation(&self) -> f64 {
        self.arrival_rate / self.service_rate
    }

    /// Runs the event loop up to the horizon and reports run averages.
    ///
    /// The event that first crosses the horizon is still processed, so the
    /// reported averages cover the full span up to that event.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `horizon` is non-positive or non-finite.
    pub fn simulate(&self, horizon: f64, source: &mut RandomSource) -> SimResult<QueueReport> {
        if !horizon.is_finite() || horizon <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "horizon",
                format!("must be positive and finite, got {}", horizon),
            ));
        }

        let mut fes = FutureEventSet::new();
        let mut now = 0.0;
        let mut previous = 0.0;
        let mut in_system = 0usize;
        let mut next_id = 0u64;
        let mut weighted_length = 0.0;
        let mut sojourn_total = 0.0;
        let mut served = 0u64;

        fes.schedule(Event {
            time: source.sample(&self.inter_arrivals),
            kind: EventKind::Arrival,
        });

        while now < horizon {
            let Some(event) = fes.pop_next() else { break };
            now = event.time;

            // The system held `in_system` customers since the previous
            // event; weight the interval before applying this one.
            let old_count = in_system;
            weighted_length += old_count as f64 * (now - previous);
            previous = now;

            match event.kind {
                EventKind::Arrival => {
                    let customer = Customer {
                        id: next_id,
                        arrival_time: now,
                    };
                    next_id += 1;
                    in_system += 1;

                    // Existing services slow down first, then the new
                    // customer is scheduled at the shared rate.
                    fes.rescale_departures(now, old_count, in_system);
                    let service = source.sample(&self.services);
                    fes.schedule(Event {
                        time: now + service * in_system as f64,
                        kind: EventKind::Departure(customer),
                    });
                    fes.schedule(Event {
                        time: now + source.sample(&self.inter_arrivals),
                        kind: EventKind::Arrival,
                    });
                }
                EventKind::Departure(customer) => {
                    sojourn_total += now - customer.arrival_time;
                    served += 1;
                    in_system = in_system.saturating_sub(1);
                    fes.rescale_departures(now, old_count, in_system);
                }
            }
        }

        let mean_queue_length = if now > 0.0 { weighted_length / now } else { 0.0 };
        let mean_sojourn_time = if served > 0 {
            sojourn_total / served as f64
        } else {
            0.0
        };
        Ok(QueueReport {
            mean_queue_length,
            mean_sojourn_time,
            customers_served: served,
        })
    }
}
