//! Run parameters for the genetic algorithm.

use serde::{Deserialize, Serialize};

/// Smallest genotype length, population size and generation cap accepted.
pub const MIN_COUNT: usize = 2;

/// Immutable parameter bundle for a single genetic algorithm run.
///
/// Construction never fails. Values outside their valid range are repaired
/// to the nearest boundary: counts are raised to at least [`MIN_COUNT`] and
/// rates are clamped into `[0, 1]` (NaN becomes 0). Deserialized values go
/// through the same repair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ParametersRepr")]
pub struct Parameters {
    genotype_length: usize,
    population_size: usize,
    maximum_generations: usize,
    mutation_rate: f64,
    crossover_rate: f64,
}

impl Parameters {
    /// Create parameters, repairing out-of-range values.
    pub fn new(
        genotype_length: usize,
        population_size: usize,
        maximum_generations: usize,
        mutation_rate: f64,
        crossover_rate: f64,
    ) -> Self {
        let parameters = Self {
            genotype_length: genotype_length.max(MIN_COUNT),
            population_size: population_size.max(MIN_COUNT),
            maximum_generations: maximum_generations.max(MIN_COUNT),
            mutation_rate: clamp_rate(mutation_rate),
            crossover_rate: clamp_rate(crossover_rate),
        };

        if parameters.genotype_length != genotype_length
            || parameters.population_size != population_size
            || parameters.maximum_generations != maximum_generations
            || parameters.mutation_rate != mutation_rate
            || parameters.crossover_rate != crossover_rate
        {
            log::warn!(
                "parameters repaired: requested ({}, {}, {}, {}, {}), using {:?}",
                genotype_length,
                population_size,
                maximum_generations,
                mutation_rate,
                crossover_rate,
                parameters
            );
        }

        parameters
    }

    /// Number of genes per chromosome.
    #[inline]
    pub fn genotype_length(&self) -> usize {
        self.genotype_length
    }

    /// Number of chromosomes per generation.
    #[inline]
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Generation cap for a run.
    #[inline]
    pub fn maximum_generations(&self) -> usize {
        self.maximum_generations
    }

    /// Probability that an offspring is mutated.
    #[inline]
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Probability that an offspring is produced by crossover.
    #[inline]
    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    /// Copy with a different genotype length.
    pub fn with_genotype_length(self, genotype_length: usize) -> Self {
        Self::new(
            genotype_length,
            self.population_size,
            self.maximum_generations,
            self.mutation_rate,
            self.crossover_rate,
        )
    }

    /// Copy with a different population size.
    pub fn with_population_size(self, population_size: usize) -> Self {
        Self::new(
            self.genotype_length,
            population_size,
            self.maximum_generations,
            self.mutation_rate,
            self.crossover_rate,
        )
    }

    /// Copy with a different generation cap.
    pub fn with_maximum_generations(self, maximum_generations: usize) -> Self {
        Self::new(
            self.genotype_length,
            self.population_size,
            maximum_generations,
            self.mutation_rate,
            self.crossover_rate,
        )
    }

    /// Copy with a different mutation rate.
    pub fn with_mutation_rate(self, mutation_rate: f64) -> Self {
        Self::new(
            self.genotype_length,
            self.population_size,
            self.maximum_generations,
            mutation_rate,
            self.crossover_rate,
        )
    }

    /// Copy with a different crossover rate.
    pub fn with_crossover_rate(self, crossover_rate: f64) -> Self {
        Self::new(
            self.genotype_length,
            self.population_size,
            self.maximum_generations,
            self.mutation_rate,
            crossover_rate,
        )
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::new(
            default_genotype_length(),
            default_population_size(),
            default_maximum_generations(),
            default_mutation_rate(),
            default_crossover_rate(),
        )
    }
}

fn clamp_rate(rate: f64) -> f64 {
    if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) }
}

/// Unvalidated wire form of [`Parameters`].
#[derive(Debug, Deserialize)]
struct ParametersRepr {
    #[serde(default = "default_genotype_length")]
    genotype_length: usize,
    #[serde(default = "default_population_size")]
    population_size: usize,
    #[serde(default = "default_maximum_generations")]
    maximum_generations: usize,
    #[serde(default = "default_mutation_rate")]
    mutation_rate: f64,
    #[serde(default = "default_crossover_rate")]
    crossover_rate: f64,
}

impl From<ParametersRepr> for Parameters {
    fn from(repr: ParametersRepr) -> Self {
        Self::new(
            repr.genotype_length,
            repr.population_size,
            repr.maximum_generations,
            repr.mutation_rate,
            repr.crossover_rate,
        )
    }
}

fn default_genotype_length() -> usize {
    8
}
fn default_population_size() -> usize {
    8
}
fn default_maximum_generations() -> usize {
    10
}
fn default_mutation_rate() -> f64 {
    0.05
}
fn default_crossover_rate() -> f64 {
    0.80
}
