//! # Core Models Module
//!
//! Data structures describing chemical entities and their electrons.
//!
//! ## Key Components
//!
//! - [`element`] - Reference data of one element and its category
//! - [`atom`] - An atom of an element with an optional charge
//! - [`compound`] - Stacks of atoms or nested compounds, and the [`compound::AtomicUnit`] union
//! - [`ion`] - Charged atoms and compounds
//! - [`orbital`] - Electrons, spins and orbitals
//! - [`shell`] - Subshells and principal shells
//! - [`configuration`] - The populated shells of an atom and its magnetism
//!
//! Atoms borrow their element from a [`PeriodicTable`](crate::core::table::PeriodicTable),
//! so every model that contains atoms carries the table's lifetime.
//!
//! ```ignore
//! use valency::core::models::compound::{Compound, Stack};
//! use valency::core::table::PeriodicTable;
//!
//! let table = PeriodicTable::builtin();
//! let water = Compound::new(vec![
//!     Stack::new(table.atom("H")?, 2)?,
//!     Stack::single(table.atom("O")?),
//! ])?;
//! assert_eq!(water.electrons(), 10);
//! ```

pub mod atom;
pub mod compound;
pub mod configuration;
pub mod element;
pub mod error;
pub mod ion;
pub mod orbital;
pub mod shell;

pub use error::ModelError;
