//! Oxidation number assignment.
//!
//! - [`rules`] - Fixed oxidation numbers for hydrogen, fluorine, groups 1, 2 and 17, and oxygen
//! - [`solver`] - [`OxidationSolver`], which balances the remaining stack against the net charge
//! - [`result`] - [`OxidationResult`] and its per-stack [`OxidationEntry`] values

pub mod result;
pub mod rules;
pub mod solver;

pub use result::{OxidationEntry, OxidationResult};
pub use rules::OxidationRule;
pub use solver::OxidationSolver;
