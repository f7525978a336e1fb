//! The inverse-kinematics controller: drives the genetic algorithm against one
//! target point and records the convergence trajectory.

use crate::config::SolverConfig;
use crate::genotype::Individual;
use crate::interfaces::{Interface, Message};
use crate::kinematics::{Arm2D, Point2D};
use crate::optimizers::GeneticAlgorithm;
use crate::Error;
use serde::Serialize;
use std::fmt::{self, Display};
use std::time::Instant;

/// Immutable snapshot of one generation's champion.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRecord {
    pub generation: usize,
    pub q1: f64,
    pub q2: f64,
    pub end_effector: Point2D,
    pub error: f64,
}

impl Display for GenerationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gen {}: q1={:.4}, q2={:.4}, pos={}, error={:.6}",
            self.generation, self.q1, self.q2, self.end_effector, self.error
        )
    }
}

/// The best configuration ever observed plus the full generation log.
#[derive(Debug, Clone, Serialize)]
pub struct SolutionResult {
    pub best: Individual,
    pub history: Vec<GenerationRecord>,
}

/// Owns an arm model and a genetic engine for the duration of solve calls.
///
/// One solver serves one solve at a time; concurrent solves need their own solver
/// instances (each engine owns its random stream, so there is no hidden sharing).
pub struct IkSolver {
    arm: Arm2D,
    ga: GeneticAlgorithm,
}

impl IkSolver {
    pub fn new(arm: Arm2D, ga: GeneticAlgorithm) -> Self {
        Self { arm, ga }
    }

    /// Builds arm and engine from a validated configuration bundle.
    pub fn from_config(config: &SolverConfig) -> Result<Self, Error> {
        config.validate()?;
        let arm = Arm2D::new(config.arm.a1, config.arm.a2)?;
        let ga = GeneticAlgorithm::new(config.genetic.clone())?;
        Ok(Self { arm, ga })
    }

    pub fn arm(&self) -> &Arm2D {
        &self.arm
    }

    /// For replaying a solution at the display boundary.
    pub fn arm_mut(&mut self) -> &mut Arm2D {
        &mut self.arm
    }

    /// Runs the generational loop against `target`.
    ///
    /// Every generation is re-evaluated, its champion logged, and the best-ever
    /// configuration updated before the termination check; when the champion's error
    /// drops strictly below `error_threshold` the run stops without evolving
    /// further, so that generation's record closes the log.
    pub fn solve(
        &mut self,
        target: Point2D,
        max_generations: usize,
        error_threshold: f64,
        interface: &dyn Interface,
    ) -> Result<SolutionResult, Error> {
        if max_generations == 0 {
            return Err("max_generations must be positive".into());
        }
        if !(error_threshold.is_finite() && error_threshold > 0.0) {
            return Err(format!("error_threshold must be positive, got {error_threshold}").into());
        }
        if !target.x.is_finite() || !target.y.is_finite() {
            return Err(format!("target must be finite, got {target}").into());
        }

        let start = Instant::now();
        let mut history: Vec<GenerationRecord> = Vec::new();
        let mut population = self.ga.initialize_population();
        self.ga.evaluate_fitness(&mut population, &self.arm, target);
        let mut best_overall = self
            .ga
            .best(&population)
            .ok_or("population is empty")?
            .clone();

        for generation in 0..max_generations {
            self.ga.evaluate_fitness(&mut population, &self.arm, target);
            let best = self
                .ga
                .best(&population)
                .ok_or("population is empty")?
                .clone();

            // drive the arm to the champion and read its pose back for the log
            self.arm.set_joint_angles(best.q1, best.q2);
            let end_effector = self.arm.end_effector_position();
            interface.post(Message::Progress {
                generation,
                q1: best.q1,
                q2: best.q2,
                end_effector,
                error: best.fitness(),
            });
            history.push(GenerationRecord {
                generation,
                q1: best.q1,
                q2: best.q2,
                end_effector,
                error: best.fitness(),
            });

            if best.fitness() < best_overall.fitness() {
                best_overall = best.clone();
                interface.post(Message::BetterSolution {
                    generation,
                    q1: best_overall.q1,
                    q2: best_overall.q2,
                    error: best_overall.fitness(),
                });
            }

            if best.fitness() < error_threshold {
                interface.post(Message::Converged {
                    generation,
                    error: best.fitness(),
                });
                break;
            }

            population = self.ga.evolve(&population);
        }

        interface.post(Message::Elapsed {
            time: start.elapsed().as_micros() as u64,
        });
        Ok(SolutionResult {
            best: best_overall,
            history,
        })
    }
}
