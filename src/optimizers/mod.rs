//! Optimization loop implementations.
//!
//! Inverse kinematics here is a stochastic search problem, and the loop that drives
//! it lives behind a small surface: build an optimizer from its configuration, then
//! let the solver controller pull populations through it generation by generation.

pub mod genetic;

pub use genetic::GeneticAlgorithm;
