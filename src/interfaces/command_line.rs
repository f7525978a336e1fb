//! Command-line front end: renders solver messages to stdout and writes result
//! files into a timestamped output directory.

use crate::interfaces::{Interface, Message};
use crate::solver::{GenerationRecord, SolutionResult};
use chrono::Local;
use csv::WriterBuilder;
use std::fs::{create_dir_all, write};
use std::path::PathBuf;

/// How many generations pass between printed progress lines.
const PROGRESS_INTERVAL: usize = 10;

pub struct CommandLine {
    pub output_dir: PathBuf,
}

impl CommandLine {
    pub fn new(maybe_output_dir: Option<PathBuf>) -> Self {
        let output_dir = maybe_output_dir.unwrap_or_else(|| {
            let time = Local::now().format("%m-%d+%H_%M_%S").to_string();
            PathBuf::from(format!("output-{time}"))
        });
        create_dir_all(&output_dir).unwrap();
        Self { output_dir }
    }

    /// Writes the per-generation convergence trace as tab-separated values:
    /// generation, q1, q2, end-effector x, end-effector y, error.
    pub fn write_trace(&self, history: &[GenerationRecord]) {
        let path = self.output_dir.join("trace.tsv");
        let mut writer = WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_path(&path)
            .unwrap();
        for record in history {
            writer
                .serialize((
                    record.generation,
                    record.q1,
                    record.q2,
                    record.end_effector.x,
                    record.end_effector.y,
                    record.error,
                ))
                .unwrap();
        }
        writer.flush().unwrap();
        println!("convergence trace written to {}", path.display());
    }

    /// Writes the best configuration and the full history as YAML and JSON.
    pub fn write_solution(&self, result: &SolutionResult) {
        let yaml_path = self.output_dir.join("solution.yaml");
        write(&yaml_path, serde_yaml::to_string(result).unwrap()).unwrap();
        let json_path = self.output_dir.join("history.json");
        write(&json_path, serde_json::to_string_pretty(&result.history).unwrap()).unwrap();
        println!(
            "solution written to {}, history to {}",
            yaml_path.display(),
            json_path.display()
        );
    }
}

impl Interface for CommandLine {
    fn post(&self, message: Message) {
        match message {
            Message::Progress {
                generation,
                end_effector,
                error,
                ..
            } => {
                if generation % PROGRESS_INTERVAL == 0 {
                    println!(
                        "generation {generation}: best error {error:.6} at {end_effector}"
                    );
                }
            }
            Message::BetterSolution {
                generation,
                q1,
                q2,
                error,
            } => {
                println!(
                    "{} generation {generation} improved the best solution: q1={q1:.4}, q2={q2:.4}, error={error:.6}",
                    Local::now().format("%H:%M:%S"),
                );
            }
            Message::Converged { generation, error } => {
                println!("converged at generation {generation} with error {error:.6}");
            }
            Message::Elapsed { time } => {
                println!("solve finished in {time} μs");
            }
        }
    }
}
