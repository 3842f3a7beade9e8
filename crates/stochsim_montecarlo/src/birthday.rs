//! Birthday-collision probability estimation.

use rand_distr::Uniform;
use stochsim_core::{RandomSource, SimResult, SimulationError};

/// Estimates the probability that `group_size` uniform draws over `days`
/// categories contain at least one duplicate.
///
/// Each trial stops at the first collision. Memory use is proportional to
/// `days` (one occupancy flag per category, allocated once and reused
/// across trials).
///
/// With `group_size > days` every trial collides by pigeonhole and the
/// estimate is exactly one.
///
/// # Errors
///
/// `InvalidParameter` if `group_size`, `days`, or `trials` is zero.
///
/// # Examples
///
/// ```rust
/// use stochsim_core::RandomSource;
/// use stochsim_montecarlo::birthday_collision_probability;
///
/// let mut source = RandomSource::from_seed(12345);
/// let p = birthday_collision_probability(23, 365, 10_000, &mut source).unwrap();
/// // The classic birthday paradox: ~50.7% for 23 people.
/// assert!((p - 0.507).abs() < 0.05);
/// ```
pub fn birthday_collision_probability(
    group_size: usize,
    days: usize,
    trials: usize,
    source: &mut RandomSource,
) -> SimResult<f64> {
    if group_size == 0 {
        return Err(SimulationError::invalid_parameter(
            "group_size",
            "must be at least 1",
        ));
    }
    if days == 0 {
        return Err(SimulationError::invalid_parameter(
            "days",
            "must be at least 1",
        ));
    }
    if trials == 0 {
        return Err(SimulationError::invalid_parameter(
            "trials",
            "must be at least 1",
        ));
    }

    let day = Uniform::new(0usize, days);
    let mut seen = vec![false; days];
    let mut marked: Vec<usize> = Vec::with_capacity(group_size.min(days));
    let mut collisions = 0usize;

    for _ in 0..trials {
        let mut collided = false;
        for _ in 0..group_size {
            let d = source.sample(&day);
            if seen[d] {
                collided = true;
                break;
            }
            seen[d] = true;
            marked.push(d);
        }
        // Reset only the touched flags; cheaper than clearing all of
        // `seen` when the group is small.
        for &d in &marked {
            seen[d] = false;
        }
        marked.clear();
        if collided {
            collisions += 1;
        }
    }
    Ok(collisions as f64 / trials as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_zero_parameters() {
        let mut source = RandomSource::from_seed(42);
        assert!(birthday_collision_probability(0, 365, 100, &mut source).is_err());
        assert!(birthday_collision_probability(23, 0, 100, &mut source).is_err());
        assert!(birthday_collision_probability(23, 365, 0, &mut source).is_err());
    }

    #[test]
    fn test_single_person_never_collides() {
        let mut source = RandomSource::from_seed(42);
        let p = birthday_collision_probability(1, 365, 1_000, &mut source).unwrap();
        assert_eq!(p, 0.0);
    }

    #[test]
    fn test_pigeonhole_always_collides() {
        let mut source = RandomSource::from_seed(42);
        let p = birthday_collision_probability(366, 365, 50, &mut source).unwrap();
        assert_eq!(p, 1.0);

        let p = birthday_collision_probability(2, 1, 50, &mut source).unwrap();
        assert_eq!(p, 1.0);
    }

    #[test]
    fn test_classic_birthday_paradox() {
        // Exact value: 1 − 365!/(342! · 365²³) ≈ 0.5073.
        let mut source = RandomSource::from_seed(42);
        let p = birthday_collision_probability(23, 365, 100_000, &mut source).unwrap();
        assert_abs_diff_eq!(p, 0.5073, epsilon = 0.01);
    }

    #[test]
    fn test_same_seed_reproduces_estimate() {
        let a = birthday_collision_probability(23, 365, 5_000, &mut RandomSource::from_seed(7))
            .unwrap();
        let b = birthday_collision_probability(23, 365, 5_000, &mut RandomSource::from_seed(7))
            .unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property test: The estimate is a trial fraction, so it must lie
        /// in [0, 1] for any parameter combination.
        #[test]
        fn prop_estimate_is_a_probability(
            seed in any::<u64>(),
            group_size in 1..60usize,
            days in 1..500usize,
            trials in 1..200usize,
        ) {
            let mut source = RandomSource::from_seed(seed);
            let p = birthday_collision_probability(group_size, days, trials, &mut source)
                .unwrap();
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}
