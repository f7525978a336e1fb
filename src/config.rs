//! Solver configuration, deserializable from a YAML file.
//!
//! Every section has defaults matching the stock solver setup, so a partial (or
//! absent) configuration file is valid. Validation is fail-fast: malformed numeric
//! ranges are caller bugs and are rejected before any optimization starts.

use crate::Error;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::f64::consts::PI;

/// Parent selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMethod {
    Tournament,
    RouletteWheel,
}

/// Recombination strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossoverMethod {
    SinglePoint,
    Uniform,
}

/// Link lengths of the arm being posed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmConfig {
    pub a1: f64,
    pub a2: f64,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self { a1: 2.0, a2: 1.5 }
    }
}

impl ArmConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.a1.is_finite() && self.a1 > 0.0) || !(self.a2.is_finite() && self.a2 > 0.0) {
            return Err(format!(
                "link lengths must be positive, got a1={}, a2={}",
                self.a1, self.a2
            )
            .into());
        }
        Ok(())
    }
}

/// Genetic algorithm parameters.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    pub population_size: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    pub min_angle: f64,
    pub max_angle: f64,
    pub selection: SelectionMethod,
    pub crossover: CrossoverMethod,
    /// Seed for the solver's random stream; omit for a fresh stream per run.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.1,
            crossover_rate: 0.8,
            min_angle: -PI,
            max_angle: PI,
            selection: SelectionMethod::Tournament,
            crossover: CrossoverMethod::Uniform,
            seed: None,
        }
    }
}

impl GeneticConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.population_size == 0 {
            return Err("population_size must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!("mutation_rate must be in [0, 1], got {}", self.mutation_rate).into());
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(
                format!("crossover_rate must be in [0, 1], got {}", self.crossover_rate).into(),
            );
        }
        if !self.min_angle.is_finite() || !self.max_angle.is_finite() {
            return Err("joint angle bounds must be finite".into());
        }
        if self.min_angle >= self.max_angle {
            return Err(format!(
                "min_angle must be below max_angle, got [{}, {}]",
                self.min_angle, self.max_angle
            )
            .into());
        }
        Ok(())
    }
}

/// When a solve run stops.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminationConfig {
    pub max_generations: usize,
    pub error_threshold: f64,
}

impl Default for TerminationConfig {
    fn default() -> Self {
        Self {
            max_generations: 200,
            error_threshold: 0.01,
        }
    }
}

impl TerminationConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_generations == 0 {
            return Err("max_generations must be positive".into());
        }
        if !(self.error_threshold.is_finite() && self.error_threshold > 0.0) {
            return Err(format!(
                "error_threshold must be positive, got {}",
                self.error_threshold
            )
            .into());
        }
        Ok(())
    }
}

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub arm: ArmConfig,
    pub genetic: GeneticConfig,
    pub termination: TerminationConfig,
}

impl SolverConfig {
    pub fn validate(&self) -> Result<(), Error> {
        self.arm.validate()?;
        self.genetic.validate()?;
        self.termination.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        assert!(SolverConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_angle_bounds() {
        let config = GeneticConfig {
            min_angle: 1.0,
            max_angle: -1.0,
            ..GeneticConfig::default()
        };
        assert!(config.validate().is_err());
        let degenerate = GeneticConfig {
            min_angle: 0.5,
            max_angle: 0.5,
            ..GeneticConfig::default()
        };
        assert!(degenerate.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_rates() {
        let config = GeneticConfig {
            mutation_rate: 1.5,
            ..GeneticConfig::default()
        };
        assert!(config.validate().is_err());
        let config = GeneticConfig {
            crossover_rate: -0.1,
            ..GeneticConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_population_and_zero_generations() {
        let config = GeneticConfig {
            population_size: 0,
            ..GeneticConfig::default()
        };
        assert!(config.validate().is_err());
        let termination = TerminationConfig {
            max_generations: 0,
            ..TerminationConfig::default()
        };
        assert!(termination.validate().is_err());
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config: SolverConfig = serde_yaml::from_str(
            "genetic:\n  population_size: 30\n  selection: roulette_wheel\n",
        )
        .unwrap();
        assert_eq!(config.genetic.population_size, 30);
        assert_eq!(config.genetic.selection, SelectionMethod::RouletteWheel);
        assert_eq!(config.genetic.crossover, CrossoverMethod::Uniform);
        assert_eq!(config.termination.max_generations, 200);
        assert_eq!(config.arm.a1, 2.0);
        assert!(config.validate().is_ok());
    }
}
