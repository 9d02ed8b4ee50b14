//! # Engine Module
//!
//! The algorithms that derive results from the chemical models.
//!
//! ## Key Components
//!
//! - [`filler`] - [`ShellFiller`], distributing an atom's electrons over shells, subshells and orbitals
//! - [`oxidation`] - [`OxidationSolver`], assigning oxidation numbers within a compound
//! - [`config`] - [`SolverConfig`] and its builder
//! - [`error`] - [`EngineError`], shared by both algorithms
//!
//! Both algorithms are pure: the same input always yields the same output and
//! nothing is cached between calls.

pub mod config;
pub mod error;
pub mod filler;
pub mod oxidation;

pub use config::{SolveStrategy, SolverConfig, SolverConfigBuilder};
pub use error::EngineError;
pub use filler::ShellFiller;
pub use oxidation::{OxidationResult, OxidationSolver};
