//! # Workflows Module
//!
//! High-level entry points that tie the periodic table, the formula parser and
//! the engine together. The command-line front end calls nothing else.
//!
//! - **Atom description** ([`describe`]) - Electron configuration and magnetism of an atom or ion
//! - **Oxidation assignment** ([`oxidation`]) - Parse a formula and solve its oxidation numbers

pub mod describe;
pub mod error;
pub mod oxidation;

pub use error::WorkflowError;
