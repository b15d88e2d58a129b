//! Parameter sweep configuration and report types.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Parameters;

/// Parameter varied across a sweep.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SweptParameter {
    /// Number of genes per chromosome.
    GenotypeLength,
    /// Number of chromosomes per generation.
    PopulationSize,
    /// Generation cap per run.
    MaximumGenerations,
}

impl SweptParameter {
    /// Human readable axis label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::GenotypeLength => "Chromosome length [bits]",
            Self::PopulationSize => "Population size [units]",
            Self::MaximumGenerations => "Maximum generations [units]",
        }
    }

    /// Replace the swept field of `base` with `value`.
    pub fn apply(&self, base: Parameters, value: usize) -> Parameters {
        match self {
            Self::GenotypeLength => base.with_genotype_length(value),
            Self::PopulationSize => base.with_population_size(value),
            Self::MaximumGenerations => base.with_maximum_generations(value),
        }
    }
}

/// Configuration for a one-parameter sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Parameter to vary.
    pub parameter: SweptParameter,
    /// First value (inclusive).
    pub start: usize,
    /// End of the range (exclusive).
    pub stop: usize,
    /// Distance between values.
    #[serde(default = "default_step")]
    pub step: usize,
    /// Values for the parameters that are not swept.
    #[serde(default)]
    pub base: Parameters,
    /// Independent runs per value.
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            parameter: SweptParameter::GenotypeLength,
            start: 2,
            stop: 5,
            step: default_step(),
            base: Parameters::default(),
            trials: default_trials(),
            random_seed: None,
        }
    }
}

fn default_step() -> usize {
    1
}
fn default_trials() -> usize {
    10
}

impl SweepConfig {
    /// Values visited by the sweep, in order.
    pub fn values(&self) -> impl Iterator<Item = usize> + '_ {
        (self.start..self.stop).step_by(self.step.max(1))
    }

    /// Validate sweep configuration.
    pub fn validate(&self) -> Result<(), SweepConfigError> {
        if self.step == 0 {
            return Err(SweepConfigError::ZeroStep);
        }
        if self.start >= self.stop {
            return Err(SweepConfigError::EmptyRange {
                start: self.start,
                stop: self.stop,
            });
        }
        if self.trials == 0 {
            return Err(SweepConfigError::NoTrials);
        }
        Ok(())
    }
}

/// Sweep configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum SweepConfigError {
    #[error("Sweep step must be non-zero")]
    ZeroStep,
    #[error("Sweep range is empty: start {start} >= stop {stop}")]
    EmptyRange { start: usize, stop: usize },
    #[error("Number of trials must be non-zero")]
    NoTrials,
}

/// Aggregated outcome of a batch of independent runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrialStats {
    /// Number of runs.
    pub trials: usize,
    /// Runs that reached the optimum.
    pub successes: usize,
    /// `successes / trials`.
    pub success_rate: f64,
    /// Mean wall time per run, in seconds.
    pub average_time: f64,
    /// Mean number of generations per run.
    pub average_generations: f64,
}

/// Aggregated statistics for one swept value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Value of the swept parameter.
    pub value: usize,
    /// Parameters actually used (after repair).
    pub parameters: Parameters,
    /// Trial statistics.
    pub stats: TrialStats,
}

/// Result of a full sweep, ready for plotting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    /// The configuration that produced this report.
    pub config: SweepConfig,
    /// One entry per swept value.
    pub points: Vec<SweepPoint>,
    /// Total wall time, in seconds.
    pub elapsed_seconds: f64,
}

impl SweepReport {
    /// Swept values.
    pub fn values(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Mean completion time per swept value, in seconds.
    pub fn completion_times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.stats.average_time).collect()
    }

    /// Success rate per swept value, as a percentage.
    pub fn success_rates_percent(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| p.stats.success_rate * 100.0)
            .collect()
    }

    /// Write the report as pretty-printed JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

/// Errors while writing a sweep report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
