//! Trial runner and one-parameter sweeps.
//!
//! Each trial builds its own [`GeneticAlgorithm`] with its own seed, so trials
//! run in parallel without sharing any mutable state. Per-trial seeds are
//! drawn from a master stream, which makes a whole sweep reproducible from a
//! single seed.

use std::time::Instant;

use rayon::prelude::*;

use crate::schema::{Parameters, SweepConfig, SweepConfigError, SweepPoint, SweepReport, TrialStats};

use super::evolution::{GeneticAlgorithm, GenomeRng};

struct TrialOutcome {
    reached: bool,
    seconds: f64,
    generations: usize,
}

/// Run `trials` independent engines and aggregate their outcomes.
pub fn run_trials(parameters: Parameters, trials: usize, seed: u64) -> TrialStats {
    let mut master = GenomeRng::new(seed);
    let seeds: Vec<u64> = (0..trials).map(|_| master.next_seed()).collect();

    let outcomes: Vec<TrialOutcome> = seeds
        .par_iter()
        .map(|&trial_seed| {
            let start = Instant::now();
            let mut engine = GeneticAlgorithm::with_seed(parameters, trial_seed);
            let reached = engine.run();
            TrialOutcome {
                reached,
                seconds: start.elapsed().as_secs_f64(),
                generations: engine.generation(),
            }
        })
        .collect();

    if outcomes.is_empty() {
        return TrialStats {
            trials: 0,
            successes: 0,
            success_rate: 0.0,
            average_time: 0.0,
            average_generations: 0.0,
        };
    }

    let n = outcomes.len() as f64;
    let successes = outcomes.iter().filter(|o| o.reached).count();

    TrialStats {
        trials: outcomes.len(),
        successes,
        success_rate: successes as f64 / n,
        average_time: outcomes.iter().map(|o| o.seconds).sum::<f64>() / n,
        average_generations: outcomes.iter().map(|o| o.generations as f64).sum::<f64>() / n,
    }
}

/// Runs a validated [`SweepConfig`].
#[derive(Debug, Clone)]
pub struct SweepRunner {
    config: SweepConfig,
}

impl SweepRunner {
    /// Validate `config` and create a runner for it.
    pub fn new(config: SweepConfig) -> Result<Self, SweepConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration being swept.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Run the sweep.
    pub fn run(&self) -> SweepReport {
        self.run_with_callback(|_| {})
    }

    /// Run the sweep, reporting every finished point.
    pub fn run_with_callback<F>(&self, mut callback: F) -> SweepReport
    where
        F: FnMut(&SweepPoint),
    {
        let start_time = Instant::now();
        let seed = self.config.random_seed.unwrap_or_else(rand::random);
        let mut master = GenomeRng::new(seed);

        log::info!(
            "sweeping {:?} over {}..{} step {} ({} trials each, seed {})",
            self.config.parameter,
            self.config.start,
            self.config.stop,
            self.config.step,
            self.config.trials,
            seed
        );

        let mut points = Vec::new();
        for value in self.config.values() {
            let parameters = self.config.parameter.apply(self.config.base, value);
            let stats = run_trials(parameters, self.config.trials, master.next_seed());

            log::debug!(
                "{:?} = {}: success rate {:.3}, average time {:.6}s",
                self.config.parameter,
                value,
                stats.success_rate,
                stats.average_time
            );

            let point = SweepPoint {
                value,
                parameters,
                stats,
            };
            callback(&point);
            points.push(point);
        }

        let mut config = self.config.clone();
        config.random_seed = Some(seed);

        SweepReport {
            config,
            points,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        }
    }
}
