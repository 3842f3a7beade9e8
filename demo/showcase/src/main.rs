//! Showcase runner for the stochsim workspace.
//!
//! Exercises every generator with its canonical scenario parameters and
//! prints a one-line summary per experiment. All experiments draw from a
//! single seeded [`RandomSource`], so the output is fully reproducible.

use std::f64::consts::PI;

use rand_distr::Exp;
use stochsim_core::{RandomSource, SimResult, SimulationError};
use stochsim_montecarlo::{
    birthday_collision_probability, estimate_mean, estimate_pi, standardized_sample_means,
};
use stochsim_processes::chain::{MarkovChain, RandomWalk};
use stochsim_processes::diffusion::BrownianMotion;
use stochsim_processes::point::{CompoundProcess, HomogeneousProcess, ThinningProcess};
use stochsim_queueing::{OnOffBuffer, ProcessorSharingQueue};

const SEED: u64 = 12345;

fn main() -> SimResult<()> {
    let mut source = RandomSource::from_seed(SEED);
    println!("stochsim showcase (seed {})", SEED);

    point_processes(&mut source)?;
    chains(&mut source)?;
    diffusions(&mut source)?;
    monte_carlo(&mut source)?;
    discrete_event(&mut source)?;

    Ok(())
}

fn point_processes(source: &mut RandomSource) -> SimResult<()> {
    println!("\n== Point processes ==");

    let poisson = HomogeneousProcess::new(1.0, 10.0)?;
    let arrivals = poisson.generate(source);
    let last = arrivals.times().last().copied().unwrap_or(0.0);
    println!(
        "homogeneous Poisson   rate 1.0 on [0, 10]: {} arrivals, last at t = {:.3}",
        arrivals.len(),
        last
    );

    let sinusoidal = ThinningProcess::new(|t: f64| 2.0 + 2.0 * (0.1 * PI * t).sin(), 4.0, 10.0)?;
    sinusoidal.check_bound(1_000)?;
    let accepted = sinusoidal.generate(source);
    println!(
        "thinned sinusoidal    rate 2 + 2 sin(0.1 pi t) under cap 4.0: {} arrivals (expected ~32.7)",
        accepted.len()
    );

    let compound = CompoundProcess::new(1.0, 10.0)?;
    let mut jumps = |source: &mut RandomSource| source.uniform_01();
    let path = compound.generate(source, &mut jumps);
    println!(
        "compound Poisson      rate 1.0, Uniform(0, 1) jumps: {} jumps, total {:.3}",
        path.len(),
        path.final_value().unwrap_or(0.0)
    );
    Ok(())
}

fn chains(source: &mut RandomSource) -> SimResult<()> {
    println!("\n== Chains and walks ==");

    let chain = MarkovChain::new(vec![
        vec![0.2, 0.3, 0.5],
        vec![0.0, 0.3, 0.7],
        vec![0.5, 0.4, 0.1],
    ])?;
    let path = chain.generate(0, 20, source)?;
    println!(
        "Markov chain          3 states, 20 steps from state 0: {:?}",
        path.states()
    );

    let walk = RandomWalk::new(0.5)?;
    let walk_path = walk.generate(100, source);
    println!(
        "symmetric random walk 100 steps: final position {:+}",
        walk_path.final_position()
    );
    Ok(())
}

fn diffusions(source: &mut RandomSource) -> SimResult<()> {
    println!("\n== Diffusions ==");

    let brownian = BrownianMotion::new(8.0, 1_000)?;
    let path = brownian.generate(source);
    println!(
        "Brownian motion       horizon 8.0, 1000 steps: W(8) = {:+.4}",
        path.final_position()
    );

    let (east, north) = brownian.generate_2d(source);
    println!(
        "planar Brownian       terminal point ({:+.4}, {:+.4})",
        east.final_position(),
        north.final_position()
    );
    Ok(())
}

fn monte_carlo(source: &mut RandomSource) -> SimResult<()> {
    println!("\n== Monte Carlo estimators ==");

    let pi_hat = estimate_pi(1_000_000, source)?;
    println!(
        "pi estimate           1e6 samples: {:.5} (error {:+.5})",
        pi_hat,
        pi_hat - PI
    );

    let service_times = exponential_distribution(10.0)?;
    let mean_hat = estimate_mean(&service_times, 100_000, source)?;
    println!(
        "sample mean           Exp(10) with 1e5 samples: {:.5} (theory 0.10000)",
        mean_hat
    );

    let collision = birthday_collision_probability(23, 365, 100_000, source)?;
    println!(
        "birthday collision    23 people, 365 days: {:.4} (theory 0.5073)",
        collision
    );

    let unit_exp = exponential_distribution(1.0)?;
    let means = standardized_sample_means(&unit_exp, 1.0, 1.0, 30, 10_000, source)?;
    let (mean, variance) = sample_moments(&means);
    println!(
        "standardized means    Exp(1), n = 30, 10000 runs: mean {:+.4}, variance {:.4}",
        mean, variance
    );
    Ok(())
}

fn discrete_event(source: &mut RandomSource) -> SimResult<()> {
    println!("\n== Discrete-event simulations ==");

    let queue = ProcessorSharingQueue::new(0.7, 0.9)?;
    let report = queue.simulate(10_000.0, source)?;
    println!(
        "M/M/1-PS queue        rates 0.7/0.9 over 10000: mean length {:.3} (theory 3.500), \
         sojourn {:.3} (theory 5.000), served {}",
        report.mean_queue_length(),
        report.mean_sojourn_time(),
        report.customers_served()
    );

    let buffer = OnOffBuffer::new(1.0, 1.0, 5.0, 2.0, 4.0)?;
    let fluid = buffer.simulate(200.0, source)?;
    println!(
        "on-off fluid buffer   fill 5.0, drain 2.0, cap 4.0 over 200: loss {:.4}, \
         empty {:.4}, output rate {:.4}",
        fluid.loss_fraction(),
        fluid.empty_fraction(),
        fluid.output_rate()
    );
    Ok(())
}

fn exponential_distribution(rate: f64) -> SimResult<Exp<f64>> {
    Exp::new(rate).map_err(|_| {
        SimulationError::invalid_parameter("rate", format!("must be positive and finite, got {}", rate))
    })
}

fn sample_moments(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance)
}
