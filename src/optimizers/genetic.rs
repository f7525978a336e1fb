//! Generational genetic algorithm over joint-angle genotypes.

use crate::config::{CrossoverMethod, GeneticConfig, SelectionMethod};
use crate::genotype::Individual;
use crate::kinematics::{forward_kinematics, Arm2D, Point2D};
use crate::operators;
use crate::Error;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The evolutionary engine: owns the algorithm parameters and the random stream.
///
/// Holding the generator here (instead of reaching for a process-wide one) keeps a
/// solve reproducible from a seed and lets concurrent solves run with fully
/// independent streams.
pub struct GeneticAlgorithm {
    config: GeneticConfig,
    rng: StdRng,
}

impl GeneticAlgorithm {
    /// Builds the engine, seeding from the configuration when a seed is set and from
    /// entropy otherwise. Fails fast on malformed parameters.
    pub fn new(config: GeneticConfig) -> Result<Self, Error> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Ok(Self { config, rng })
    }

    /// Builds the engine with an explicit seed, overriding any seed in the
    /// configuration.
    pub fn with_seed(config: GeneticConfig, seed: u64) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// `population_size` independent uniform draws, all unevaluated.
    pub fn initialize_population(&mut self) -> Vec<Individual> {
        (0..self.config.population_size)
            .map(|_| {
                Individual::random(&mut self.rng, self.config.min_angle, self.config.max_angle)
            })
            .collect()
    }

    /// Scores every individual as the Euclidean distance between its end effector
    /// and the target. Each score depends only on that individual's own angles, so
    /// evaluation order is irrelevant and re-evaluation is idempotent.
    pub fn evaluate_fitness(&self, population: &mut [Individual], arm: &Arm2D, target: Point2D) {
        for individual in population.iter_mut() {
            let (_, end_effector) =
                forward_kinematics(arm.a1(), arm.a2(), individual.q1, individual.q2);
            individual.set_fitness(end_effector.distance_to(&target));
        }
    }

    /// Picks one parent with the configured strategy; always an independent copy.
    pub fn select(&mut self, population: &[Individual]) -> Individual {
        match self.config.selection {
            SelectionMethod::Tournament => {
                operators::tournament_selection(&mut self.rng, population)
            }
            SelectionMethod::RouletteWheel => {
                operators::roulette_wheel_selection(&mut self.rng, population)
            }
        }
    }

    /// Recombines two parents into two children. With probability
    /// `1 - crossover_rate` recombination is skipped and the children are plain
    /// copies of the parents (their stale fitness is discarded at the next
    /// evaluation).
    pub fn crossover(
        &mut self,
        parent1: &Individual,
        parent2: &Individual,
    ) -> (Individual, Individual) {
        if self.rng.random::<f64>() > self.config.crossover_rate {
            return (parent1.clone(), parent2.clone());
        }
        match self.config.crossover {
            CrossoverMethod::SinglePoint => operators::single_point_crossover(parent1, parent2),
            CrossoverMethod::Uniform => {
                operators::uniform_crossover(&mut self.rng, parent1, parent2)
            }
        }
    }

    pub fn mutate(&mut self, individual: &mut Individual) {
        operators::mutate(
            &mut self.rng,
            individual,
            self.config.mutation_rate,
            self.config.min_angle,
            self.config.max_angle,
        );
    }

    /// The fittest member, earliest position winning ties. `None` only for an empty
    /// population, which a validated configuration never produces.
    pub fn best<'population>(
        &self,
        population: &'population [Individual],
    ) -> Option<&'population Individual> {
        population
            .iter()
            .position_min_by(|a, b| a.fitness().total_cmp(&b.fitness()))
            .map(|index| &population[index])
    }

    /// One generational replacement step.
    ///
    /// The top `max(1, N/10)` individuals by fitness carry over unmodified; the rest
    /// of the next generation is bred by select/crossover/mutate until it holds
    /// exactly `N` members (the second child of the final pair is dropped when it
    /// would overflow). Parents are drawn from the population as given, elites
    /// included, and the same individual may be drawn twice.
    pub fn evolve(&mut self, population: &[Individual]) -> Vec<Individual> {
        let population_size = self.config.population_size;
        let mut ranked = population.to_vec();
        ranked.sort_by(|a, b| a.fitness().total_cmp(&b.fitness()));
        let elite_count = (population_size / 10).max(1);
        let mut next_generation: Vec<Individual> = Vec::with_capacity(population_size);
        next_generation.extend(ranked.iter().take(elite_count).cloned());

        while next_generation.len() < population_size {
            let parent1 = self.select(population);
            let parent2 = self.select(population);
            let (mut child1, mut child2) = self.crossover(&parent1, &parent2);
            self.mutate(&mut child1);
            self.mutate(&mut child2);
            next_generation.push(child1);
            if next_generation.len() < population_size {
                next_generation.push(child2);
            }
        }
        next_generation
    }
}
