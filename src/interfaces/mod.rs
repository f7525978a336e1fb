//! Reporting boundary between the solver core and whatever is watching it.
//!
//! The solver never prints; it posts [`Message`]s through an [`Interface`]. The
//! command-line front end renders them as text, a graphical front end could animate
//! them, and tests can drop them on the floor with [`Silent`].

use crate::kinematics::Point2D;
use serde::Serialize;

pub mod command_line;

/// Everything the solver reports while running.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    /// One entry per generation: the generation champion and where it reaches.
    Progress {
        generation: usize,
        q1: f64,
        q2: f64,
        end_effector: Point2D,
        error: f64,
    },
    /// The best-ever configuration improved.
    BetterSolution {
        generation: usize,
        q1: f64,
        q2: f64,
        error: f64,
    },
    /// The error threshold was beaten and the run stopped early.
    Converged { generation: usize, error: f64 },
    /// Wall-clock time of the whole solve, in microseconds.
    Elapsed { time: u64 },
}

/// Implemented by every front end that wants to observe a solve.
pub trait Interface {
    fn post(&self, message: Message);
}

/// Discards every message. Useful for tests, benchmarks and embedding.
pub struct Silent;

impl Interface for Silent {
    fn post(&self, _message: Message) {}
}
