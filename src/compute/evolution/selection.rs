//! Parent selection.

use super::chromosome::Chromosome;
use super::genome::GenomeRng;

/// Default tournament size.
pub const DEFAULT_PRESSURE: usize = 4;

/// Tournament selection with replacement.
///
/// Draws `pressure` indices uniformly with replacement and returns the one
/// whose chromosome has the highest fitness under [`Chromosome::by_fitness`];
/// the earliest draw wins ties. A `pressure` below 1 or larger than the
/// population size is replaced by 1, which degenerates to a single uniform
/// draw.
///
/// # Panics
///
/// Panics if `population` is empty.
pub fn tournament_selection(
    population: &[Chromosome],
    pressure: usize,
    rng: &mut GenomeRng,
) -> usize {
    assert!(!population.is_empty(), "cannot select from an empty population");

    let pressure = if pressure < 1 || pressure > population.len() {
        1
    } else {
        pressure
    };

    let mut best_idx = rng.index(population.len());
    for _ in 1..pressure {
        let idx = rng.index(population.len());
        if Chromosome::by_fitness(&population[idx], &population[best_idx]).is_gt() {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graded_population(size: usize) -> Vec<Chromosome> {
        (0..size)
            .map(|i| {
                let genes = (0..size).map(|g| g <= i).collect();
                Chromosome::from_genes(genes)
            })
            .collect()
    }

    #[test]
    fn test_pressure_one_is_uniform() {
        let population = graded_population(5);
        let mut rng = GenomeRng::new(42);
        let draws = 50_000;
        let mut counts = [0usize; 5];

        for _ in 0..draws {
            counts[tournament_selection(&population, 1, &mut rng)] += 1;
        }

        // Selected-fitness distribution matches the population's.
        let expected = draws as f64 / 5.0;
        for &count in &counts {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "counts = {:?}", counts);
        }
    }

    #[test]
    fn test_invalid_pressure_forced_to_one() {
        let population = graded_population(4);
        let draws = 20_000;

        for pressure in [0, 5, 10] {
            let mut rng = GenomeRng::new(7);
            let mut counts = [0usize; 4];
            for _ in 0..draws {
                counts[tournament_selection(&population, pressure, &mut rng)] += 1;
            }
            let expected = draws as f64 / 4.0;
            for &count in &counts {
                let deviation = (count as f64 - expected).abs() / expected;
                assert!(deviation < 0.05, "pressure {}: {:?}", pressure, counts);
            }
        }
    }

    #[test]
    fn test_pressure_equal_to_population_is_kept() {
        // A full-size tournament still favours the fittest slot.
        let population = graded_population(4);
        let mut rng = GenomeRng::new(13);
        let draws = 20_000;
        let mut best_hits = 0;

        for _ in 0..draws {
            if tournament_selection(&population, 4, &mut rng) == 3 {
                best_hits += 1;
            }
        }

        // P(best) = 1 - 0.75^4 ~ 0.68, versus 0.25 for a uniform draw.
        assert!(best_hits > draws / 2, "best_hits = {}", best_hits);
    }

    #[test]
    fn test_pressure_favours_fitter() {
        let population = graded_population(10);
        let mut rng = GenomeRng::new(3);
        let draws = 10_000;
        let mut best_hits = 0;
        let mut worst_hits = 0;

        for _ in 0..draws {
            match tournament_selection(&population, DEFAULT_PRESSURE, &mut rng) {
                9 => best_hits += 1,
                0 => worst_hits += 1,
                _ => {}
            }
        }

        // P(best) = 1 - 0.9^4 ~ 0.34, P(worst) = 0.1^4.
        assert!(best_hits > draws / 4, "best_hits = {}", best_hits);
        assert!(worst_hits < draws / 100, "worst_hits = {}", worst_hits);
    }

    #[test]
    fn test_index_in_bounds() {
        let population = graded_population(3);
        let mut rng = GenomeRng::new(11);
        for pressure in 0..6 {
            let idx = tournament_selection(&population, pressure, &mut rng);
            assert!(idx < population.len());
        }
    }
}
