//! # Core Module
//!
//! The stateless foundation of the library: chemical models, element reference
//! data and formula parsing.
//!
//! - **Chemical Representation** ([`models`]) - Elements, atoms, compounds, ions and electron shells
//! - **Reference Data** ([`table`]) - The periodic table and its loaders
//! - **Text Input** ([`io`]) - Parsing chemical formulas into compound trees

pub mod io;
pub mod models;
pub mod table;
