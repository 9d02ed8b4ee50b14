use super::data::builtin_elements;
use crate::core::models::atom::Atom;
use crate::core::models::element::{Element, ElementCategory};
use crate::core::models::error::ModelError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Unsupported element table format for '{path}': expected a .toml or .csv file")]
    UnsupportedFormat { path: String },
    #[error("Invalid element table: {0}")]
    Invalid(String),
    #[error("No element with atomic number {0}")]
    UnknownAtomicNumber(u8),
    #[error("No element with symbol '{0}'")]
    UnknownSymbol(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
struct CsvRecord {
    atomic_number: u8,
    symbol: String,
    name: String,
    group: Option<u8>,
    period: u8,
    category: String,
    atomic_weight: Option<f64>,
}

/// An immutable collection of elements indexed by atomic number and symbol.
///
/// Atoms borrow their [`Element`] from the table, so a table must outlive every
/// model built from it.
#[derive(Debug, Clone)]
pub struct PeriodicTable {
    elements: Vec<Element>,
    symbols: HashMap<String, usize>,
}

impl PeriodicTable {
    /// The 118 known elements with IUPAC groups, periods and standard weights.
    pub fn builtin() -> Self {
        Self::index(builtin_elements())
    }

    /// Loads a table from a `.toml` (`[[elements]]` tables) or `.csv` file.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let elements = match extension.as_deref() {
            Some("toml") => Self::load_toml(path)?,
            Some("csv") => Self::load_csv(path)?,
            _ => {
                return Err(TableError::UnsupportedFormat {
                    path: path.to_string_lossy().to_string(),
                });
            }
        };
        debug!(
            path = %path.display(),
            count = elements.len(),
            "Loaded element table."
        );
        Self::from_elements(elements)
    }

    fn load_toml(path: &Path) -> Result<Vec<Element>, TableError> {
        let content = std::fs::read_to_string(path).map_err(|e| TableError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: TableFile = toml::from_str(&content).map_err(|e| TableError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(file.elements)
    }

    fn load_csv(path: &Path) -> Result<Vec<Element>, TableError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| TableError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        let mut elements = Vec::new();
        for result in reader.deserialize::<CsvRecord>() {
            let record = result.map_err(|e| TableError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            let category = record
                .category
                .parse::<ElementCategory>()
                .map_err(|e| TableError::Invalid(format!("{} ({}): {e}", record.symbol, path.display())))?;
            elements.push(Element {
                atomic_number: record.atomic_number,
                symbol: record.symbol,
                name: record.name,
                group: record.group,
                period: record.period,
                category,
                atomic_weight: record.atomic_weight,
            });
        }
        Ok(elements)
    }

    /// Builds a table from arbitrary elements.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Invalid`] unless the atomic numbers are exactly
    /// `1..=n`, every symbol is well formed (`Fe`, `Uue`) and no symbol repeats.
    pub fn from_elements(mut elements: Vec<Element>) -> Result<Self, TableError> {
        if elements.is_empty() {
            return Err(TableError::Invalid("the table contains no elements".to_string()));
        }
        elements.sort_by_key(|e| e.atomic_number);

        for (position, element) in elements.iter().enumerate() {
            let expected = position + 1;
            if usize::from(element.atomic_number) != expected {
                return Err(TableError::Invalid(format!(
                    "expected atomic number {expected}, found {} ({})",
                    element.atomic_number, element.symbol
                )));
            }
            if !is_well_formed_symbol(&element.symbol) {
                return Err(TableError::Invalid(format!(
                    "'{}' is not a valid element symbol",
                    element.symbol
                )));
            }
            if let Some(group) = element.group {
                if !(1..=18).contains(&group) {
                    return Err(TableError::Invalid(format!(
                        "{} lies in group {group}, groups run from 1 to 18",
                        element.symbol
                    )));
                }
            }
        }

        let table = Self::index(elements);
        if table.symbols.len() != table.elements.len() {
            return Err(TableError::Invalid(
                "element symbols must be unique".to_string(),
            ));
        }
        Ok(table)
    }

    fn index(elements: Vec<Element>) -> Self {
        let symbols = elements
            .iter()
            .enumerate()
            .map(|(position, e)| (e.symbol.clone(), position))
            .collect();
        Self { elements, symbols }
    }

    pub fn get(&self, atomic_number: u8) -> Option<&Element> {
        let position = usize::from(atomic_number).checked_sub(1)?;
        self.elements.get(position)
    }

    pub fn lookup(&self, atomic_number: u8) -> Result<&Element, TableError> {
        self.get(atomic_number)
            .ok_or(TableError::UnknownAtomicNumber(atomic_number))
    }

    /// Case-sensitive symbol lookup, `"Co"` and `"CO"` differ.
    pub fn by_symbol(&self, symbol: &str) -> Option<&Element> {
        self.symbols.get(symbol).map(|&position| &self.elements[position])
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in atomic number order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// A neutral atom of the element with this symbol.
    pub fn atom(&self, symbol: &str) -> Result<Atom<'_>, TableError> {
        self.by_symbol(symbol)
            .map(Atom::new)
            .ok_or_else(|| TableError::UnknownSymbol(symbol.to_string()))
    }

    /// An atom of the element with this symbol carrying `charge`.
    pub fn ion(&self, symbol: &str, charge: i32) -> Result<Atom<'_>, TableError> {
        let element = self
            .by_symbol(symbol)
            .ok_or_else(|| TableError::UnknownSymbol(symbol.to_string()))?;
        Ok(Atom::with_charge(element, charge)?)
    }
}

fn is_well_formed_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    symbol.len() <= 3 && first.is_ascii_uppercase() && chars.all(|c| c.is_ascii_lowercase())
}
