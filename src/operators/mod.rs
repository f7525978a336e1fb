//! Evolutionary operators over joint-angle genotypes.
//!
//! Selection, crossover and mutation are free functions taking the random generator
//! explicitly, so the same seeded stream drives a whole run and results are
//! reproducible. Selection returns an independent copy, never a reference into the
//! population.

use crate::genotype::Individual;
use rand::Rng;

/// Number of candidates drawn per tournament.
pub const TOURNAMENT_SIZE: usize = 3;

/// Half-width of the uniform mutation perturbation.
pub const MUTATION_STEP: f64 = 0.25;

/// Draws [`TOURNAMENT_SIZE`] candidates independently and uniformly **with
/// replacement**, and returns a copy of the fittest. Ties keep the earliest draw
/// (strict `<` while scanning).
pub fn tournament_selection<R: Rng>(rng: &mut R, population: &[Individual]) -> Individual {
    let mut best = &population[rng.random_range(0..population.len())];
    for _ in 1..TOURNAMENT_SIZE {
        let competitor = &population[rng.random_range(0..population.len())];
        if competitor.fitness() < best.fitness() {
            best = competitor;
        }
    }
    best.clone()
}

/// Spins an inverse-fitness roulette wheel: candidate `i` gets weight
/// `max_fitness - fitness_i + 1`, so the lowest-fitness individual owns the largest
/// slice and every candidate keeps a weight of at least 1.
///
/// The `+ 1` offset is part of the selection pressure this solver is calibrated
/// against; do not substitute a different inversion.
pub fn roulette_wheel_selection<R: Rng>(rng: &mut R, population: &[Individual]) -> Individual {
    let max_fitness = population
        .iter()
        .map(|individual| individual.fitness())
        .fold(f64::NEG_INFINITY, f64::max);
    let total_weight: f64 = population
        .iter()
        .map(|individual| max_fitness - individual.fitness() + 1.0)
        .sum();
    let spin = rng.random::<f64>() * total_weight;
    let mut cumulative = 0.0;
    for individual in population {
        cumulative += max_fitness - individual.fitness() + 1.0;
        if cumulative >= spin {
            return individual.clone();
        }
    }
    // Accumulated rounding can leave the final cumulative weight a hair below the
    // spin; the wheel then lands on the last candidate.
    population[population.len() - 1].clone()
}

/// Single-point crossover. The genotype has two genes, so the one cut sits between
/// `q1` and `q2`: each child takes `q1` from one parent and `q2` from the other.
pub fn single_point_crossover(
    parent1: &Individual,
    parent2: &Individual,
) -> (Individual, Individual) {
    let child1 = Individual::new(parent1.q1, parent2.q2);
    let child2 = Individual::new(parent2.q1, parent1.q2);
    (child1, child2)
}

/// Uniform crossover: four independent fair coins, one per child per gene.
pub fn uniform_crossover<R: Rng>(
    rng: &mut R,
    parent1: &Individual,
    parent2: &Individual,
) -> (Individual, Individual) {
    let q1_child1 = if rng.random::<bool>() { parent1.q1 } else { parent2.q1 };
    let q2_child1 = if rng.random::<bool>() { parent1.q2 } else { parent2.q2 };
    let q1_child2 = if rng.random::<bool>() { parent1.q1 } else { parent2.q1 };
    let q2_child2 = if rng.random::<bool>() { parent1.q2 } else { parent2.q2 };
    (
        Individual::new(q1_child1, q2_child1),
        Individual::new(q1_child2, q2_child2),
    )
}

/// Mutates each gene independently: with probability `mutation_rate`, adds a uniform
/// perturbation from `[-MUTATION_STEP, +MUTATION_STEP]` and clamps the result into
/// `[min_angle, max_angle]`.
pub fn mutate<R: Rng>(
    rng: &mut R,
    individual: &mut Individual,
    mutation_rate: f64,
    min_angle: f64,
    max_angle: f64,
) {
    if rng.random::<f64>() < mutation_rate {
        let perturbation = (rng.random::<f64>() - 0.5) * 2.0 * MUTATION_STEP;
        individual.q1 = (individual.q1 + perturbation).clamp(min_angle, max_angle);
    }
    if rng.random::<f64>() < mutation_rate {
        let perturbation = (rng.random::<f64>() - 0.5) * 2.0 * MUTATION_STEP;
        individual.q2 = (individual.q2 + perturbation).clamp(min_angle, max_angle);
    }
}
