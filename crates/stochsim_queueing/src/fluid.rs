//! On-off fluid buffer with finite capacity.
//!
//! A source alternates between exponentially distributed ON and OFF
//! phases. While ON it pours fluid into the buffer at `fill_rate`; the
//! buffer drains continuously at `drain_rate`. Fluid arriving to a full
//! buffer is lost, and the outflow stalls whenever the buffer runs dry
//! during an OFF phase. Phase boundaries are the only events, so each
//! phase is integrated in closed form rather than stepped.

use rand_distr::Exp;
use stochsim_core::{RandomSource, SimResult, SimulationError};

/// Run-level summary of one fluid-buffer simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FluidReport {
    loss_fraction: f64,
    empty_fraction: f64,
    output_rate: f64,
}

impl FluidReport {
    /// Fraction of the produced fluid lost to overflow.
    #[inline]
    pub fn loss_fraction(&self) -> f64 {
        self.loss_fraction
    }

    /// Fraction of the run during which the buffer sat empty.
    #[inline]
    pub fn empty_fraction(&self) -> f64 {
        self.empty_fraction
    }

    /// Long-run outflow rate, `drain_rate` discounted by the empty time.
    #[inline]
    pub fn output_rate(&self) -> f64 {
        self.output_rate
    }
}

/// Finite-capacity fluid buffer fed by an on-off source.
///
/// # Examples
///
/// ```rust
/// use stochsim_core::RandomSource;
/// use stochsim_queueing::OnOffBuffer;
///
/// let buffer = OnOffBuffer::new(1.0, 1.0, 5.0, 2.0, 4.0).unwrap();
/// let mut source = RandomSource::from_seed(12345);
/// let report = buffer.simulate(200.0, &mut source).unwrap();
///
/// assert!(report.loss_fraction() <= 1.0);
/// assert!(report.output_rate() <= 2.0);
/// ```
#[derive(Clone, Debug)]
pub struct OnOffBuffer {
    on_rate: f64,
    off_rate: f64,
    fill_rate: f64,
    drain_rate: f64,
    capacity: f64,
    on_durations: Exp<f64>,
    off_durations: Exp<f64>,
}

impl OnOffBuffer {
    /// Creates a buffer model.
    ///
    /// `on_rate` and `off_rate` parameterise the exponential phase
    /// durations (mean `1 / rate`). The source must overwhelm the drain
    /// while ON (`fill_rate > drain_rate`), otherwise the buffer never
    /// accumulates and the model degenerates.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if any rate or the capacity is non-positive or
    /// non-finite, or if `fill_rate <= drain_rate`.
    pub fn new(
        on_rate: f64,
        off_rate: f64,
        fill_rate: f64,
        drain_rate: f64,
        capacity: f64,
    ) -> SimResult<Self> {
        if !on_rate.is_finite() || on_rate <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "on_rate",
                format!("must be positive and finite, got {}", on_rate),
            ));
        }
        if !off_rate.is_finite() || off_rate <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "off_rate",
                format!("must be positive and finite, got {}", off_rate),
            ));
        }
        if !fill_rate.is_finite() || fill_rate <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "fill_rate",
                format!("must be positive and finite, got {}", fill_rate),
            ));
        }
        if !drain_rate.is_finite() || drain_rate <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "drain_rate",
                format!("must be positive and finite, got {}", drain_rate),
            ));
        }
        if fill_rate <= drain_rate {
            return Err(SimulationError::invalid_parameter(
                "fill_rate",
                format!(
                    "must exceed drain_rate {} for the buffer to fill, got {}",
                    drain_rate, fill_rate
                ),
            ));
        }
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "capacity",
                format!("must be positive and finite, got {}", capacity),
            ));
        }
        let on_durations = Exp::new(on_rate).map_err(|_| {
            SimulationError::invalid_parameter(
                "on_rate",
                format!("must be positive and finite, got {}", on_rate),
            )
        })?;
        let off_durations = Exp::new(off_rate).map_err(|_| {
            SimulationError::invalid_parameter(
                "off_rate",
                format!("must be positive and finite, got {}", off_rate),
            )
        })?;
        Ok(Self {
            on_rate,
            off_rate,
            fill_rate,
            drain_rate,
            capacity,
            on_durations,
            off_durations,
        })
    }

    /// Rate of the exponential ON-phase durations.
    #[inline]
    pub fn on_rate(&self) -> f64 {
        self.on_rate
    }

    /// Rate of the exponential OFF-phase durations.
    #[inline]
    pub fn off_rate(&self) -> f64 {
        self.off_rate
    }

    /// Inflow rate while the source is ON.
    #[inline]
    pub fn fill_rate(&self) -> f64 {
        self.fill_rate
    }

    /// Constant drain rate of the buffer.
    #[inline]
    pub fn drain_rate(&self) -> f64 {
        self.drain_rate
    }

    /// Maximum fluid the buffer can hold.
    #[inline]
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Simulates alternating phases until `run_length` and reports the
    /// loss and starvation fractions.
    ///
    /// The run starts with an ON phase and an empty buffer. The final
    /// phase is truncated at the horizon so every report covers exactly
    /// `run_length` time units.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `run_length` is non-positive or non-finite.
    pub fn simulate(&self, run_length: f64, source: &mut RandomSource) -> SimResult<FluidReport> {
        if !run_length.is_finite() || run_length <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "run_length",
                format!("must be positive and finite, got {}", run_length),
            ));
        }

        let mut clock = 0.0;
        let mut level = 0.0;
        let mut empty_time = 0.0;
        let mut lost = 0.0;
        let mut produced = 0.0;

        while clock < run_length {
            // ON phase: net inflow at fill − drain; overflow above the
            // cap is lost at exactly that net rate once the cap is hit.
            let on = source.sample(&self.on_durations).min(run_length - clock);
            clock += on;
            produced += self.fill_rate * on;
            let unclamped = level + on * (self.fill_rate - self.drain_rate);
            if unclamped > self.capacity {
                lost += unclamped - self.capacity;
                level = self.capacity;
            } else {
                level = unclamped;
            }

            if clock >= run_length {
                break;
            }

            // OFF phase: pure drain; time below zero is time spent empty.
            let off = source.sample(&self.off_durations).min(run_length - clock);
            clock += off;
            level -= off * self.drain_rate;
            if level < 0.0 {
                empty_time += -level / self.drain_rate;
                level = 0.0;
            }
        }

        let loss_fraction = if produced > 0.0 { lost / produced } else { 0.0 };
        let empty_fraction = empty_time / run_length;
        Ok(FluidReport {
            loss_fraction,
            empty_fraction,
            output_rate: self.drain_rate * (1.0 - empty_fraction),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical() -> OnOffBuffer {
        OnOffBuffer::new(1.0, 1.0, 5.0, 2.0, 4.0).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_parameters() {
        assert!(OnOffBuffer::new(0.0, 1.0, 5.0, 2.0, 4.0).is_err());
        assert!(OnOffBuffer::new(1.0, f64::NAN, 5.0, 2.0, 4.0).is_err());
        assert!(OnOffBuffer::new(1.0, 1.0, -5.0, 2.0, 4.0).is_err());
        assert!(OnOffBuffer::new(1.0, 1.0, 5.0, 0.0, 4.0).is_err());
        assert!(OnOffBuffer::new(1.0, 1.0, 5.0, 2.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_new_rejects_drain_dominating_fill() {
        let err = OnOffBuffer::new(1.0, 1.0, 2.0, 2.0, 4.0).unwrap_err();
        assert_eq!(err.parameter_name(), "fill_rate");
        assert!(OnOffBuffer::new(1.0, 1.0, 1.0, 2.0, 4.0).is_err());
    }

    #[test]
    fn test_simulate_rejects_bad_run_length() {
        let buffer = canonical();
        let mut source = RandomSource::from_seed(42);
        assert!(buffer.simulate(0.0, &mut source).is_err());
        assert!(buffer.simulate(-1.0, &mut source).is_err());
        assert!(buffer.simulate(f64::NAN, &mut source).is_err());
    }

    #[test]
    fn test_fractions_are_proper() {
        let buffer = canonical();
        let report = buffer.simulate(500.0, &mut RandomSource::from_seed(42)).unwrap();

        assert!((0.0..=1.0).contains(&report.loss_fraction()));
        assert!((0.0..=1.0).contains(&report.empty_fraction()));
        assert!(report.output_rate() >= 0.0);
        assert!(report.output_rate() <= buffer.drain_rate());
    }

    #[test]
    fn test_busy_buffer_both_overflows_and_starves() {
        // With mean phases of one time unit the level climbs three per ON
        // and falls two per OFF, so a long run sees both regimes.
        let buffer = canonical();
        let report = buffer.simulate(200.0, &mut RandomSource::from_seed(42)).unwrap();

        assert!(report.loss_fraction() > 0.0);
        assert!(report.empty_fraction() > 0.0);
    }

    #[test]
    fn test_report_is_reproducible() {
        let buffer = canonical();
        let a = buffer.simulate(200.0, &mut RandomSource::from_seed(9)).unwrap();
        let b = buffer.simulate(200.0, &mut RandomSource::from_seed(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_larger_capacity_never_hurts() {
        // With a shared seed the phase sequence is identical, so a larger
        // buffer loses no more fluid and starves no longer than a small
        // one on every sample path.
        let small = OnOffBuffer::new(1.0, 1.0, 5.0, 2.0, 2.0).unwrap();
        let large = OnOffBuffer::new(1.0, 1.0, 5.0, 2.0, 8.0).unwrap();

        let report_small = small.simulate(300.0, &mut RandomSource::from_seed(42)).unwrap();
        let report_large = large.simulate(300.0, &mut RandomSource::from_seed(42)).unwrap();

        assert!(report_large.loss_fraction() <= report_small.loss_fraction());
        assert!(report_large.empty_fraction() <= report_small.empty_fraction());
        assert!(report_large.output_rate() >= report_small.output_rate());
    }

    #[test]
    fn test_accessors_round_trip() {
        let buffer = OnOffBuffer::new(0.5, 2.0, 7.0, 3.0, 10.0).unwrap();
        assert_eq!(buffer.on_rate(), 0.5);
        assert_eq!(buffer.off_rate(), 2.0);
        assert_eq!(buffer.fill_rate(), 7.0);
        assert_eq!(buffer.drain_rate(), 3.0);
        assert_eq!(buffer.capacity(), 10.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_serialises() {
        let report = canonical().simulate(50.0, &mut RandomSource::from_seed(42)).unwrap();
        let json = serde_json::to_value(report).unwrap();

        assert!(json.get("loss_fraction").is_some());
        assert!(json.get("empty_fraction").is_some());
        assert!(json.get("output_rate").is_some());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_report_stays_proper(
                on_rate in 0.2..3.0f64,
                off_rate in 0.2..3.0f64,
                drain_rate in 0.5..4.0f64,
                surplus in 0.5..6.0f64,
                capacity in 0.5..20.0f64,
                seed in 0u64..1_000,
            ) {
                let buffer = OnOffBuffer::new(
                    on_rate,
                    off_rate,
                    drain_rate + surplus,
                    drain_rate,
                    capacity,
                )
                .unwrap();
                let report = buffer.simulate(50.0, &mut RandomSource::from_seed(seed)).unwrap();

                prop_assert!(report.loss_fraction() >= 0.0);
                prop_assert!(report.loss_fraction() <= 1.0 + 1e-9);
                prop_assert!(report.empty_fraction() >= 0.0);
                prop_assert!(report.empty_fraction() <= 1.0 + 1e-9);
                prop_assert!(report.output_rate() <= drain_rate);
            }
        }
    }
}
