//! # Periodic Table Module
//!
//! Provides the element reference data every model is built on.
//!
//! ## Key Components
//!
//! - [`registry`] - [`PeriodicTable`] lookups plus TOML and CSV loading
//!
//! The built-in table covers all 118 elements. Custom tables are validated so
//! that atomic numbers run from 1 without gaps and symbols are unique.
//!
//! ```ignore
//! use valency::core::table::PeriodicTable;
//!
//! let table = PeriodicTable::builtin();
//! let iron = table.by_symbol("Fe").unwrap();
//! assert_eq!(iron.atomic_number, 26);
//! ```

mod data;
pub mod registry;

pub use registry::{PeriodicTable, TableError};
