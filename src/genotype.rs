//! Candidate solutions: a pair of joint angles with a cached fitness.

use rand::Rng;
use serde::Serialize;
use std::cmp::Ordering;

/// One candidate joint configuration.
///
/// `Clone` yields a fully independent value, including the cached fitness. Ordering
/// compares fitness only, ascending, so the minimum of a population is the fittest
/// individual.
#[derive(Debug, Clone, Serialize)]
pub struct Individual {
    pub q1: f64,
    pub q2: f64,
    fitness: f64,
}

impl Individual {
    /// Fitness value carried until the first evaluation.
    pub const UNEVALUATED: f64 = f64::INFINITY;

    pub fn new(q1: f64, q2: f64) -> Self {
        Self {
            q1,
            q2,
            fitness: Self::UNEVALUATED,
        }
    }

    /// Draws both joint angles independently and uniformly from
    /// `[min_angle, max_angle)`.
    pub fn random<R: Rng>(rng: &mut R, min_angle: f64, max_angle: f64) -> Self {
        let q1 = rng.random_range(min_angle..max_angle);
        let q2 = rng.random_range(min_angle..max_angle);
        Self::new(q1, q2)
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness < Self::UNEVALUATED
    }
}

impl PartialEq for Individual {
    fn eq(&self, other: &Self) -> bool {
        self.fitness == other.fitness
    }
}

impl PartialOrd for Individual {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.fitness.partial_cmp(&other.fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_individuals_are_unevaluated() {
        let individual = Individual::new(0.5, -0.5);
        assert!(!individual.is_evaluated());
        assert_eq!(individual.fitness(), Individual::UNEVALUATED);
    }

    #[test]
    fn random_draws_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let (min_angle, max_angle) = (-1.25, 2.5);
        for _ in 0..10_000 {
            let individual = Individual::random(&mut rng, min_angle, max_angle);
            assert!(individual.q1 >= min_angle && individual.q1 <= max_angle);
            assert!(individual.q2 >= min_angle && individual.q2 <= max_angle);
        }
    }

    #[test]
    fn clone_is_an_independent_value() {
        let mut original = Individual::new(1.0, 2.0);
        original.set_fitness(0.25);
        let mut copy = original.clone();
        assert_eq!(copy.fitness(), 0.25);
        copy.q1 = 9.0;
        copy.set_fitness(4.0);
        assert_eq!(original.q1, 1.0);
        assert_eq!(original.fitness(), 0.25);
    }

    #[test]
    fn ordering_is_by_fitness_ascending() {
        let mut better = Individual::new(0.0, 0.0);
        better.set_fitness(0.1);
        let mut worse = Individual::new(0.0, 0.0);
        worse.set_fitness(0.2);
        assert!(better < worse);
        assert!(worse > better);
        let mut tied = Individual::new(5.0, 5.0);
        tied.set_fitness(0.1);
        assert_eq!(better, tied);
    }
}
