use armik::config::{CrossoverMethod, GeneticConfig, SelectionMethod, SolverConfig};
use armik::interfaces::{Interface, Message, Silent};
use armik::kinematics::{Arm2D, Point2D};
use armik::optimizers::GeneticAlgorithm;
use armik::solver::{IkSolver, SolutionResult};

const MAX_GENERATIONS: usize = 200;
const ERROR_THRESHOLD: f64 = 0.01;
const SEEDS: [u64; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

fn solve_seeded(config: GeneticConfig, seed: u64, target: Point2D) -> SolutionResult {
    let arm = Arm2D::new(2.0, 1.5).unwrap();
    let ga = GeneticAlgorithm::with_seed(config, seed).unwrap();
    let mut solver = IkSolver::new(arm, ga);
    solver
        .solve(target, MAX_GENERATIONS, ERROR_THRESHOLD, &Silent)
        .unwrap()
}

/// A single success can be luck; convergence is only meaningful if the median
/// seeded run achieves it, so a strict majority of seeds must clear the threshold.
fn assert_median_convergence(config: GeneticConfig, target: Point2D) {
    let successes = SEEDS
        .iter()
        .filter(|&&seed| solve_seeded(config.clone(), seed, target).best.fitness() < ERROR_THRESHOLD)
        .count();
    assert!(
        successes * 2 > SEEDS.len(),
        "only {successes}/{} seeds converged for target {target}",
        SEEDS.len()
    );
}

#[test]
fn converges_on_axis_target() {
    // reachable exactly at q1=0, q2=0
    assert_median_convergence(GeneticConfig::default(), Point2D::new(2.0, 0.0));
}

#[test]
fn converges_on_off_axis_targets() {
    for target in [Point2D::new(2.0, 2.0), Point2D::new(1.5, 1.0), Point2D::new(-1.0, 2.5)] {
        assert_median_convergence(GeneticConfig::default(), target);
    }
}

#[test]
fn every_strategy_combination_converges() {
    let selections = [SelectionMethod::Tournament, SelectionMethod::RouletteWheel];
    let crossovers = [CrossoverMethod::SinglePoint, CrossoverMethod::Uniform];
    let target = Point2D::new(1.5, 1.0);
    for selection in selections {
        for crossover in crossovers {
            let config = GeneticConfig {
                selection,
                crossover,
                ..GeneticConfig::default()
            };
            // roulette pressure is milder than tournament, so the budget is
            // doubled relative to the stock run
            let successes = SEEDS
                .iter()
                .filter(|&&seed| {
                    let arm = Arm2D::new(2.0, 1.5).unwrap();
                    let ga = GeneticAlgorithm::with_seed(config.clone(), seed).unwrap();
                    let mut solver = IkSolver::new(arm, ga);
                    let result = solver
                        .solve(target, 2 * MAX_GENERATIONS, ERROR_THRESHOLD, &Silent)
                        .unwrap();
                    result.best.fitness() < ERROR_THRESHOLD
                })
                .count();
            assert!(
                successes * 2 > SEEDS.len(),
                "only {successes}/{} seeds converged for {selection:?}/{crossover:?}",
                SEEDS.len()
            );
        }
    }
}

#[test]
fn unreachable_target_reports_closest_approach() {
    // distance 10 from the origin against a total reach of 3.5
    let target = Point2D::new(10.0, 0.0);
    let physical_floor = 10.0 - Arm2D::new(2.0, 1.5).unwrap().reach();
    for seed in [1, 2, 3] {
        let result = solve_seeded(GeneticConfig::default(), seed, target);
        let best = result.best.fitness();
        assert!(
            best >= physical_floor - 1e-9,
            "fitness {best} below the physical floor {physical_floor}"
        );
        // the straight arm pointing at the target attains the floor, and the
        // search reliably gets close to it
        assert!(best < physical_floor + 0.2, "fitness {best} far from floor");
        assert_eq!(result.history.len(), MAX_GENERATIONS);
    }
}

#[test]
fn history_length_tracks_termination() {
    for seed in SEEDS {
        let result = solve_seeded(GeneticConfig::default(), seed, Point2D::new(2.0, 0.0));
        assert!(result.history.len() <= MAX_GENERATIONS);
        assert!(!result.history.is_empty());
        // only the final record may clear the threshold
        for record in &result.history[..result.history.len() - 1] {
            assert!(record.error >= ERROR_THRESHOLD);
        }
        if result.history.len() < MAX_GENERATIONS {
            assert!(result.history.last().unwrap().error < ERROR_THRESHOLD);
        }
    }
}

#[test]
fn solver_instance_is_reusable_across_solves() {
    let arm = Arm2D::new(2.0, 1.5).unwrap();
    let ga = GeneticAlgorithm::with_seed(GeneticConfig::default(), 42).unwrap();
    let mut solver = IkSolver::new(arm, ga);
    let first = solver
        .solve(Point2D::new(1.5, 1.0), 30, 1e-15, &Silent)
        .unwrap();
    let second = solver
        .solve(Point2D::new(-1.0, 2.5), 30, 1e-15, &Silent)
        .unwrap();
    // the second run starts a fresh log, it does not append to the first
    assert_eq!(first.history.len(), 30);
    assert_eq!(second.history.len(), 30);
    assert_eq!(second.history[0].generation, 0);
}

#[test]
fn from_config_honors_the_configured_seed() {
    let mut config = SolverConfig::default();
    config.genetic.seed = Some(7);
    let run = || {
        let mut solver = IkSolver::from_config(&config).unwrap();
        solver
            .solve(Point2D::new(1.5, 1.0), 25, 1e-15, &Silent)
            .unwrap()
            .history
            .iter()
            .map(|record| (record.q1, record.q2, record.error))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

struct Recorder(std::cell::RefCell<Vec<Message>>);

impl Interface for Recorder {
    fn post(&self, message: Message) {
        self.0.borrow_mut().push(message);
    }
}

#[test]
fn interface_sees_every_generation_and_the_convergence() {
    let arm = Arm2D::new(2.0, 1.5).unwrap();
    let ga = GeneticAlgorithm::with_seed(GeneticConfig::default(), 5).unwrap();
    let mut solver = IkSolver::new(arm, ga);
    let recorder = Recorder(std::cell::RefCell::new(Vec::new()));
    let result = solver
        .solve(Point2D::new(2.0, 0.0), MAX_GENERATIONS, ERROR_THRESHOLD, &recorder)
        .unwrap();
    let messages = recorder.0.into_inner();
    let progress_count = messages
        .iter()
        .filter(|message| matches!(message, Message::Progress { .. }))
        .count();
    assert_eq!(progress_count, result.history.len());
    let converged = messages
        .iter()
        .any(|message| matches!(message, Message::Converged { .. }));
    assert_eq!(converged, result.history.len() < MAX_GENERATIONS);
    assert!(matches!(messages.last(), Some(Message::Elapsed { .. })));
}
