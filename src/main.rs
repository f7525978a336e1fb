//! armik: genetic-algorithm inverse kinematics for a planar two-link arm.
//!
//! `armik` poses the arm forward from given joint angles, or searches for the joint
//! angles that reach a target point. Solver parameters come from an optional
//! `config.yaml`; results and the per-generation convergence trace land in an output
//! directory.

use armik::config::SolverConfig;
use armik::interfaces::command_line::CommandLine;
use armik::kinematics::{Arm2D, Point2D};
use armik::solver::{IkSolver, SolutionResult};
use armik::Error;
use clap::{Parser, Subcommand};
use std::fs::read_to_string;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "armik")]
#[command(author, version, about, long_about)]
#[command(propagate_version = true)]
struct CommandLineArgs {
    #[command(subcommand)]
    command: Command,
    /// Solver configuration file, defaults to config.yaml when present
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Output directory, defaults to output-<timestamp>
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Clone)]
enum Command {
    /// Compute the forward pose for the given joint angles (in degrees)
    Forward { q1: f64, q2: f64 },
    /// Search for joint angles placing the end effector at the target point
    Solve { x: f64, y: f64 },
    /// Solve the built-in batch of test targets and report pass/fail
    Batch,
}

/// Targets exercised by the `batch` command.
const BATCH_TARGETS: [(f64, f64); 3] = [(2.0, 2.0), (1.5, 1.0), (-1.0, 2.5)];

fn load_config(path: &Option<PathBuf>) -> Result<SolverConfig, Error> {
    let (path, explicit) = match path {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from("config.yaml"), false),
    };
    if !path.exists() {
        if explicit {
            return Err(format!("configuration file {} does not exist", path.display()).into());
        }
        return Ok(SolverConfig::default());
    }
    let content = read_to_string(&path)
        .map_err(|error| format!("cannot read {}: {error}", path.display()))?;
    let config: SolverConfig = serde_yaml::from_str(&content)
        .map_err(|error| format!("cannot parse {}: {error}", path.display()))?;
    info!("loaded configuration from {}", path.display());
    Ok(config)
}

fn print_solution(config: &SolverConfig, target: Point2D, result: &SolutionResult) {
    println!("Target Position: ({:.4}, {:.4})", target.x, target.y);
    println!();
    println!("Generation Results:");
    for record in result.history.iter().take(10) {
        println!("{record}");
    }
    if result.history.len() > 10 {
        println!("...");
        if let Some(last) = result.history.last() {
            println!("{last}");
        }
    }

    let best = &result.best;
    let mut arm = Arm2D::new(config.arm.a1, config.arm.a2).expect("validated link lengths");
    arm.set_joint_angles(best.q1, best.q2);
    let final_position = arm.end_effector_position();

    println!();
    println!("Best Solution:");
    println!("q1 = {:.4} rad ({:.2} deg)", best.q1, best.q1.to_degrees());
    println!("q2 = {:.4} rad ({:.2} deg)", best.q2, best.q2.to_degrees());
    println!("Final Position: {final_position}");
    println!("Error: {:.6} units", best.fitness());
}

fn run_solve(config: &SolverConfig, target: Point2D, cli: &CommandLine) -> Result<SolutionResult, Error> {
    let mut solver = IkSolver::from_config(config)?;
    let result = solver.solve(
        target,
        config.termination.max_generations,
        config.termination.error_threshold,
        cli,
    )?;
    cli.write_trace(&result.history);
    cli.write_solution(&result);
    Ok(result)
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();
    let args = CommandLineArgs::parse();
    let config = load_config(&args.config)?;
    config.validate()?;

    match args.command {
        Command::Forward { q1, q2 } => {
            let mut arm = Arm2D::new(config.arm.a1, config.arm.a2)?;
            arm.set_joint_angles(q1.to_radians(), q2.to_radians());
            let pose = arm.pose();
            println!("Joint 1: {}", pose.joint1);
            println!("Joint 2: {}", pose.joint2);
            println!("End Effector Position: {}", pose.end_effector);
        }
        Command::Solve { x, y } => {
            let cli = CommandLine::new(args.output.clone());
            let target = Point2D::new(x, y);
            let result = run_solve(&config, target, &cli)?;
            println!();
            print_solution(&config, target, &result);
        }
        Command::Batch => {
            let cli = CommandLine::new(args.output.clone());
            println!("Running Tests on {} Target Positions", BATCH_TARGETS.len());
            println!("=====================================");
            println!();
            for (index, (x, y)) in BATCH_TARGETS.iter().enumerate() {
                let target = Point2D::new(*x, *y);
                println!("Test {}: Target = ({x:.4}, {y:.4})", index + 1);
                // each target gets its own result files under the parent directory
                let child = CommandLine::new(Some(cli.output_dir.join(format!("{index}"))));
                let result = run_solve(&config, target, &child)?;
                let best = &result.best;
                let mut arm = Arm2D::new(config.arm.a1, config.arm.a2)?;
                arm.set_joint_angles(best.q1, best.q2);
                println!("  Solution: q1={:.4}, q2={:.4}", best.q1, best.q2);
                println!("  Reached: {}", arm.end_effector_position());
                let verdict = if best.fitness() < config.termination.error_threshold {
                    "[PASS]"
                } else {
                    "[FAIL]"
                };
                println!("  Error: {:.6} units {verdict}", best.fitness());
                println!();
            }
            info!("batch run complete");
        }
    }
    Ok(())
}
