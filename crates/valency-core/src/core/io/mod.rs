//! Provides text input for chemical entities.
//!
//! Formulas such as `H2SO4`, `Ca(OH)2` or `[NH4^+][NO3^-]` are parsed into
//! [`Compound`](crate::core::models::compound::Compound) trees whose atoms borrow
//! from a [`PeriodicTable`](crate::core::table::PeriodicTable).

pub mod formula;
