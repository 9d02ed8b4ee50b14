//! # Valency
//!
//! A library for modelling chemical elements, atoms, compounds and ions, and for
//! deriving their electron configurations and oxidation numbers.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Immutable chemical models, the periodic table
//!   every atom borrows its element from, and the formula parser.
//!
//! - **[`engine`]: The Algorithms.** The diagonal shell filler and the
//!   oxidation-number solver, both pure functions of their input.
//!
//! - **[`workflows`]: The Public API.** Complete procedures such as "describe
//!   this ion" or "assign oxidation numbers to this formula".

pub mod core;
pub mod engine;
pub mod workflows;
