//! Fixed-length boolean chromosome with cached one-max fitness.

use std::cmp::Ordering;
use std::fmt;

use super::fitness::{FitnessFunction, OneMax};
use super::genome::GenomeRng;

/// A candidate solution: a fixed-length bit string and its fitness.
///
/// The cached fitness always matches the current genes; every operation
/// that changes a gene recomputes it before returning.
#[derive(Debug, Clone)]
pub struct Chromosome {
    genes: Vec<bool>,
    fitness: f64,
}

impl Chromosome {
    /// Create a chromosome of `length` unset genes.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero.
    pub fn new(length: usize) -> Self {
        assert!(length > 0, "chromosome length must be non-zero");
        Self {
            genes: vec![false; length],
            fitness: 0.0,
        }
    }

    /// Create a chromosome from explicit genes.
    ///
    /// # Panics
    ///
    /// Panics if `genes` is empty.
    pub fn from_genes(genes: Vec<bool>) -> Self {
        assert!(!genes.is_empty(), "chromosome length must be non-zero");
        let mut chromosome = Self {
            genes,
            fitness: 0.0,
        };
        chromosome.recompute_fitness();
        chromosome
    }

    /// Create a randomly initialized chromosome.
    pub fn random(length: usize, rng: &mut GenomeRng) -> Self {
        let mut chromosome = Self::new(length);
        chromosome.initialize(rng);
        chromosome
    }

    /// Overwrite every gene with a fair coin flip.
    pub fn initialize(&mut self, rng: &mut GenomeRng) {
        rng.fill_bits(&mut self.genes);
        self.recompute_fitness();
    }

    /// Flip `size` distinct, uniformly chosen genes.
    ///
    /// A `size` outside `1..=len` flips a single gene instead.
    pub fn mutate(&mut self, size: usize, rng: &mut GenomeRng) {
        let size = if (1..=self.len()).contains(&size) {
            size
        } else {
            1
        };

        for position in rng.distinct_indices(self.len(), size) {
            self.genes[position] = !self.genes[position];
        }
        self.recompute_fitness();
    }

    /// Uniform crossover: each gene comes from either parent with equal
    /// probability.
    ///
    /// # Panics
    ///
    /// Panics if either parent's length differs from `self`.
    pub fn crossover(&mut self, parent1: &Chromosome, parent2: &Chromosome, rng: &mut GenomeRng) {
        assert_eq!(parent1.len(), self.len(), "crossover parent length mismatch");
        assert_eq!(parent2.len(), self.len(), "crossover parent length mismatch");

        for ((gene, &g1), &g2) in self
            .genes
            .iter_mut()
            .zip(&parent1.genes)
            .zip(&parent2.genes)
        {
            *gene = if rng.coin() { g1 } else { g2 };
        }
        self.recompute_fitness();
    }

    /// Deep copy genes and fitness from `source`.
    pub fn copy_from(&mut self, source: &Chromosome) {
        self.genes.clone_from(&source.genes);
        self.fitness = source.fitness;
    }

    /// Gene values.
    #[inline]
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Fraction of set genes.
    #[inline]
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Number of genes.
    #[inline]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Always false; chromosomes have at least one gene.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Whether every gene is set.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        self.fitness == 1.0
    }

    /// Compare by fitness alone.
    pub fn by_fitness(a: &Chromosome, b: &Chromosome) -> Ordering {
        a.fitness.total_cmp(&b.fitness)
    }

    fn recompute_fitness(&mut self) {
        self.fitness = OneMax.evaluate(&self.genes);
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &gene in &self.genes {
            f.write_str(if gene { "1" } else { "0" })?;
        }
        Ok(())
    }
}
