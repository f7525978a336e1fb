//! armik is a genetic-algorithm inverse kinematics solver for a planar two-link
//! manipulator. Instead of inverting the kinematic equations in closed form, it
//! searches the joint space with a generational genetic algorithm: candidate joint
//! configurations are scored by the Euclidean distance between their forward-kinematics
//! end effector and the target point, and evolved under selection, crossover and
//! mutation until the error drops below a threshold or the generation budget runs out.
//!
//! armik is also a command-line program of the same name. Given a target point and an
//! optional solver configuration file, it reports per-generation progress, prints the
//! best joint angles found, and writes the full convergence trace to an output
//! directory.

pub mod config;
pub mod genotype;
pub mod interfaces;
pub mod kinematics;
pub mod operators;
pub mod optimizers;
pub mod solver;

/// Error type
#[derive(Debug, Clone)]
pub struct Error {
    pub message: String,
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self { message: value }
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
