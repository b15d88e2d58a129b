//! Generational genetic algorithm over one-max chromosomes.

use crate::schema::{EvolutionHistory, EvolutionPhase, EvolutionProgress, Parameters, StopReason};

use super::chromosome::Chromosome;
use super::genome::GenomeRng;
use super::selection::{DEFAULT_PRESSURE, tournament_selection};

/// Tournament re-draws allowed before the second parent is forced to differ.
const MAX_PARENT_RETRIES: usize = 64;

/// Genetic algorithm engine.
///
/// Owns its population and random stream. [`run`](Self::run) drives the
/// whole lifecycle; the accessors expose the final state afterwards.
pub struct GeneticAlgorithm {
    parameters: Parameters,
    seed: u64,
    rng: GenomeRng,
    pressure: usize,
    population: Vec<Chromosome>,
    generation: usize,
    best_fitness: f64,
    best_index: usize,
    optimum_reached: bool,
    history: EvolutionHistory,
    phase: EvolutionPhase,
    stop_reason: Option<StopReason>,
}

impl GeneticAlgorithm {
    /// Create an engine with a random seed.
    pub fn new(parameters: Parameters) -> Self {
        Self::with_seed(parameters, rand::random())
    }

    /// Create an engine whose runs are reproducible from `seed`.
    pub fn with_seed(parameters: Parameters, seed: u64) -> Self {
        Self {
            parameters,
            seed,
            rng: GenomeRng::new(seed),
            pressure: DEFAULT_PRESSURE,
            population: Vec::new(),
            generation: 0,
            best_fitness: 0.0,
            best_index: 0,
            optimum_reached: false,
            history: EvolutionHistory::default(),
            phase: EvolutionPhase::Uninitialized,
            stop_reason: None,
        }
    }

    /// Set the tournament size used for parent selection.
    pub fn with_pressure(mut self, pressure: usize) -> Self {
        self.pressure = pressure;
        self
    }

    /// Run until the optimum is found or the generation cap is hit.
    ///
    /// Returns whether the optimum was reached. Each call starts a fresh
    /// population, continuing the engine's random stream.
    pub fn run(&mut self) -> bool {
        self.run_loop(None)
    }

    /// Like [`run`](Self::run), reporting progress after initialization and
    /// after every generation.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> bool
    where
        F: FnMut(&EvolutionProgress),
    {
        let callback: &mut dyn FnMut(&EvolutionProgress) = &mut callback;
        self.run_loop(Some(callback))
    }

    fn run_loop(&mut self, mut callback: Option<&mut dyn FnMut(&EvolutionProgress)>) -> bool {
        self.initialize();
        if let Some(cb) = callback.as_deref_mut() {
            cb(&self.describe());
        }

        while self.best_fitness < 1.0 && self.generation < self.parameters.maximum_generations() {
            self.reproduce();
            log::trace!(
                "generation {}: best fitness {:.4}",
                self.generation,
                self.best_fitness
            );
            if let Some(cb) = callback.as_deref_mut() {
                cb(&self.describe());
            }
        }

        let reason = if self.optimum_reached {
            StopReason::OptimumReached
        } else {
            StopReason::MaxGenerations
        };
        self.stop_reason = Some(reason);
        self.phase = EvolutionPhase::Terminated;

        log::debug!(
            "run finished after {} generations ({:?}), best fitness {:.4}",
            self.generation,
            reason,
            self.best_fitness
        );

        self.optimum_reached
    }

    /// Create a random population and reset the run state.
    pub(crate) fn initialize(&mut self) {
        let length = self.parameters.genotype_length();
        self.population = (0..self.parameters.population_size())
            .map(|_| Chromosome::random(length, &mut self.rng))
            .collect();

        self.generation = 0;
        self.optimum_reached = false;
        self.stop_reason = None;
        self.history.clear();
        self.track_best();
        self.phase = EvolutionPhase::Initialized;
    }

    /// Replace the population with one generation of offspring.
    pub(crate) fn reproduce(&mut self) {
        let length = self.parameters.genotype_length();
        let crossover_rate = self.parameters.crossover_rate();
        let mutation_rate = self.parameters.mutation_rate();

        let mut next_gen = Vec::with_capacity(self.parameters.population_size());

        for _ in 0..self.parameters.population_size() {
            let (idx1, idx2) = self.select_parents();
            let parent1 = &self.population[idx1];
            let parent2 = &self.population[idx2];

            let mut offspring = Chromosome::new(length);
            if self.rng.chance(crossover_rate) {
                offspring.crossover(parent1, parent2, &mut self.rng);
            } else {
                let source = if self.rng.coin() { parent1 } else { parent2 };
                offspring.copy_from(source);
            }

            if self.rng.chance(mutation_rate) {
                offspring.mutate(1, &mut self.rng);
            }

            next_gen.push(offspring);
        }

        self.population = next_gen;
        self.track_best();
        self.generation += 1;
        self.phase = EvolutionPhase::Reproducing;
    }

    /// Pick two parents occupying different population slots.
    ///
    /// The second parent is re-drawn by tournament up to
    /// `MAX_PARENT_RETRIES` times, then replaced by a uniformly random other
    /// slot.
    fn select_parents(&mut self) -> (usize, usize) {
        let first = tournament_selection(&self.population, self.pressure, &mut self.rng);
        let mut second = tournament_selection(&self.population, self.pressure, &mut self.rng);

        let mut retries = 0;
        while second == first && retries < MAX_PARENT_RETRIES {
            second = tournament_selection(&self.population, self.pressure, &mut self.rng);
            retries += 1;
        }

        if second == first {
            let len = self.population.len();
            second = (first + 1 + self.rng.index(len - 1)) % len;
        }

        (first, second)
    }

    /// Recompute best index, best fitness and the optimum flag.
    fn track_best(&mut self) {
        let (best_index, best_fitness) = self
            .population
            .iter()
            .enumerate()
            .reduce(|best, current| {
                if Chromosome::by_fitness(current.1, best.1).is_gt() {
                    current
                } else {
                    best
                }
            })
            .map(|(i, c)| (i, c.fitness()))
            .unwrap_or((0, 0.0));

        self.best_index = best_index;
        self.best_fitness = best_fitness;
        self.optimum_reached = best_fitness == 1.0;
        self.history.push(best_fitness, self.average_fitness());
    }

    fn average_fitness(&self) -> f64 {
        if self.population.is_empty() {
            0.0
        } else {
            self.population.iter().map(|c| c.fitness()).sum::<f64>() / self.population.len() as f64
        }
    }

    /// Snapshot of the current state.
    pub fn describe(&self) -> EvolutionProgress {
        EvolutionProgress {
            generation: self.generation,
            total_generations: self.parameters.maximum_generations(),
            population_size: self.population.len(),
            best_fitness: self.best_fitness,
            avg_fitness: self.average_fitness(),
            best_index: self.best_index,
            best_genes: self
                .best_chromosome()
                .map(|c| c.genes().to_vec())
                .unwrap_or_default(),
            optimum_reached: self.optimum_reached,
            phase: self.phase,
        }
    }

    /// Parameters this engine was built with.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Seed of the engine's random stream.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Completed generations in the current run.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best fitness in the current population.
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Index of the best chromosome in the current population.
    pub fn best_index(&self) -> usize {
        self.best_index
    }

    /// Best chromosome in the current population, once initialized.
    pub fn best_chromosome(&self) -> Option<&Chromosome> {
        self.population.get(self.best_index)
    }

    /// Whether the best chromosome has every gene set.
    pub fn optimum_reached(&self) -> bool {
        self.optimum_reached
    }

    /// Current population.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Fitness history of the current run.
    pub fn history(&self) -> &EvolutionHistory {
        &self.history
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> EvolutionPhase {
        self.phase
    }

    /// Why the last run stopped, if it has finished.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success_rate(parameters: Parameters, trials: u64) -> f64 {
        let successes = (0..trials)
            .filter(|&seed| GeneticAlgorithm::with_seed(parameters, seed).run())
            .count();
        successes as f64 / trials as f64
    }

    #[test]
    fn test_engine_creation() {
        let engine = GeneticAlgorithm::with_seed(Parameters::default(), 1);
        assert_eq!(engine.phase(), EvolutionPhase::Uninitialized);
        assert_eq!(engine.generation(), 0);
        assert!(engine.best_chromosome().is_none());
        assert!(engine.stop_reason().is_none());
        assert!(engine.population().is_empty());
    }

    #[test]
    fn test_initialize() {
        let parameters = Parameters::new(12, 9, 10, 0.05, 0.8);
        let mut engine = GeneticAlgorithm::with_seed(parameters, 3);
        engine.initialize();

        assert_eq!(engine.phase(), EvolutionPhase::Initialized);
        assert_eq!(engine.population().len(), 9);
        assert!(engine.population().iter().all(|c| c.len() == 12));
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.history().len(), 1);

        let max = engine
            .population()
            .iter()
            .map(|c| c.fitness())
            .fold(0.0, f64::max);
        assert_eq!(engine.best_fitness(), max);
        assert_eq!(engine.population()[engine.best_index()].fitness(), max);
    }

    #[test]
    fn test_run_terminates_within_cap() {
        for (length, size, max_gens) in [(2, 2, 2), (8, 8, 10), (32, 6, 15), (64, 20, 40)] {
            for seed in 0..10 {
                let parameters = Parameters::new(length, size, max_gens, 0.05, 0.8);
                let mut engine = GeneticAlgorithm::with_seed(parameters, seed);
                let reached = engine.run();

                assert!(engine.generation() <= max_gens);
                assert_eq!(engine.phase(), EvolutionPhase::Terminated);
                assert_eq!(reached, engine.optimum_reached());

                let best = engine.best_chromosome().unwrap();
                let all_set = best.genes().iter().all(|&g| g);
                assert_eq!(reached, engine.best_fitness() == 1.0);
                assert_eq!(reached, all_set);

                if reached {
                    assert_eq!(engine.stop_reason(), Some(StopReason::OptimumReached));
                } else {
                    assert_eq!(engine.generation(), max_gens);
                    assert_eq!(engine.stop_reason(), Some(StopReason::MaxGenerations));
                }
            }
        }
    }

    #[test]
    fn test_population_size_invariant() {
        let parameters = Parameters::new(24, 7, 30, 0.2, 0.6);
        let mut engine = GeneticAlgorithm::with_seed(parameters, 11);
        let mut reports = 0;

        engine.run_with_callback(|progress| {
            assert_eq!(progress.population_size, 7);
            assert_eq!(progress.generation, reports);
            reports += 1;
        });

        assert_eq!(reports, engine.generation() + 1);
        assert_eq!(engine.population().len(), 7);
    }

    #[test]
    fn test_history_tracks_generations() {
        let parameters = Parameters::new(40, 10, 25, 0.05, 0.8);
        let mut engine = GeneticAlgorithm::with_seed(parameters, 5);
        engine.run();

        let history = engine.history();
        assert_eq!(history.len(), engine.generation() + 1);
        assert_eq!(history.avg_fitness.len(), history.len());
        assert_eq!(history.best_fitness.last().copied(), Some(engine.best_fitness()));
        for (best, avg) in history.best_fitness.iter().zip(&history.avg_fitness) {
            assert!(*avg <= *best + 1e-12);
        }
    }

    #[test]
    fn test_no_variation_copies_parents() {
        let parameters = Parameters::new(16, 12, 10, 0.0, 0.0);
        let mut engine = GeneticAlgorithm::with_seed(parameters, 21);
        engine.initialize();

        for _ in 0..5 {
            let previous: Vec<Vec<bool>> = engine
                .population()
                .iter()
                .map(|c| c.genes().to_vec())
                .collect();

            engine.reproduce();

            for child in engine.population() {
                assert!(previous.iter().any(|genes| genes.as_slice() == child.genes()));
            }
        }
    }

    #[test]
    fn test_parents_are_distinct() {
        // Two slots with equal fitness still count as distinct parents.
        let parameters = Parameters::new(4, 2, 10, 0.0, 0.0);
        let mut engine = GeneticAlgorithm::with_seed(parameters, 8);
        engine.initialize();

        for _ in 0..1000 {
            let (a, b) = engine.select_parents();
            assert_ne!(a, b);
            assert!(a < 2 && b < 2);
        }
    }

    #[test]
    fn test_fixed_seed_reproducible() {
        let parameters = Parameters::new(48, 16, 60, 0.1, 0.7);

        let mut first = GeneticAlgorithm::with_seed(parameters, 1234);
        let mut second = GeneticAlgorithm::with_seed(parameters, 1234);
        let a = first.run();
        let b = second.run();

        assert_eq!(a, b);
        assert_eq!(first.generation(), second.generation());
        assert_eq!(first.history(), second.history());
        assert_eq!(
            first.best_chromosome().unwrap().genes(),
            second.best_chromosome().unwrap().genes()
        );
    }

    #[test]
    fn test_random_seed_is_replayable() {
        let parameters = Parameters::new(30, 10, 20, 0.05, 0.8);
        let mut engine = GeneticAlgorithm::new(parameters);
        engine.run();

        let mut replay = GeneticAlgorithm::with_seed(parameters, engine.seed());
        replay.run();
        assert_eq!(engine.history(), replay.history());
    }

    #[test]
    fn test_custom_pressure() {
        let parameters = Parameters::new(16, 12, 30, 0.05, 0.8);
        for pressure in [0, 1, 2, 8, 12] {
            let mut engine = GeneticAlgorithm::with_seed(parameters, 4).with_pressure(pressure);
            engine.run();
            assert!(engine.generation() <= 30);
            assert_eq!(engine.population().len(), 12);
        }
    }

    #[test]
    fn test_describe_has_no_side_effects() {
        let parameters = Parameters::new(10, 6, 10, 0.05, 0.8);
        let mut engine = GeneticAlgorithm::with_seed(parameters, 2);
        engine.initialize();
        engine.reproduce();

        let before = engine.describe();
        let after = engine.describe();
        assert_eq!(before.generation, 1);
        assert_eq!(before.best_genes, after.best_genes);
        assert_eq!(before.best_fitness, engine.best_fitness());
        assert_eq!(before.phase, EvolutionPhase::Reproducing);
        assert_eq!(
            before.best_genes.as_slice(),
            engine.best_chromosome().unwrap().genes()
        );
        assert!(before.to_string().starts_with("generation 1/10"));
    }

    #[test]
    fn test_rerun_starts_fresh() {
        let parameters = Parameters::new(64, 4, 5, 0.05, 0.8);
        let mut engine = GeneticAlgorithm::with_seed(parameters, 17);
        engine.run();
        assert_eq!(engine.generation(), 5);

        engine.run();
        assert_eq!(engine.generation(), 5);
        assert_eq!(engine.history().len(), 6);
    }

    #[test]
    fn test_four_bit_problem_solved() {
        // The default tournament of 4 covers the whole population of 4.
        let parameters = Parameters::new(4, 4, 50, 0.05, 0.80);
        let rate = success_rate(parameters, 200);
        assert!(rate >= 0.9, "success rate {}", rate);
    }
}
