//! Fitness functions over boolean genotypes.

/// Maps a genotype to a score in `[0, 1]`.
///
/// [`OneMax`] is the only implementation; [`Chromosome`](super::Chromosome)
/// always scores with it.
pub trait FitnessFunction {
    /// Score `genes`. `genes` is never empty.
    fn evaluate(&self, genes: &[bool]) -> f64;
}

/// Fraction of genes that are set.
///
/// Reaches exactly `1.0` only when every gene is set, since the score is
/// `k / len` for integers `k` and `len`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneMax;

impl FitnessFunction for OneMax {
    #[inline]
    fn evaluate(&self, genes: &[bool]) -> f64 {
        let ones = genes.iter().filter(|&&g| g).count();
        ones as f64 / genes.len() as f64
    }
}
