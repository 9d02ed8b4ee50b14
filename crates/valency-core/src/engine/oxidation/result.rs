use super::rules::OxidationRule;
use crate::core::models::element::Element;
use std::fmt;

/// The oxidation number of one stack of atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct OxidationEntry<'t> {
    pub element: &'t Element,
    /// Charge of the atom itself, usually zero.
    pub atom_charge: i32,
    /// Atoms in the stack this entry was derived from.
    pub quantity: u32,
    /// Atoms this entry stands for in the outermost compound, nested quantities included.
    pub multiplicity: u32,
    /// Oxidation number of a single atom.
    pub number: i32,
    pub rule: OxidationRule,
    /// Stack indices leading from the outermost compound to this atom.
    pub path: Vec<usize>,
}

impl OxidationEntry<'_> {
    pub fn symbol(&self) -> &str {
        &self.element.symbol
    }

    /// Contribution of the entry to the compound's charge.
    pub fn weighted(&self) -> i64 {
        i64::from(self.number) * i64::from(self.multiplicity)
    }
}

impl fmt::Display for OxidationEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+}", self.element.symbol, self.number)
    }
}

/// Oxidation numbers assigned to a compound.
///
/// An unbalanced result is still a value: the entries that could be assigned
/// are kept and [`unresolved`](Self::unresolved) names the element whose number
/// could not be found, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct OxidationResult<'t> {
    pub(crate) target: i32,
    pub(crate) entries: Vec<OxidationEntry<'t>>,
    pub(crate) unresolved: Option<&'t Element>,
    pub(crate) balanced: bool,
}

impl<'t> OxidationResult<'t> {
    /// Net charge the weighted numbers must add up to.
    pub fn target(&self) -> i32 {
        self.target
    }

    /// Entries in stack order, nested compounds expanded in place.
    pub fn entries(&self) -> &[OxidationEntry<'t>] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<OxidationEntry<'t>> {
        self.entries
    }

    pub fn is_balanced(&self) -> bool {
        self.balanced
    }

    pub fn unresolved(&self) -> Option<&'t Element> {
        self.unresolved
    }

    /// Number of the first entry for `symbol`.
    pub fn number_for(&self, symbol: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|e| e.symbol() == symbol)
            .map(|e| e.number)
    }

    /// Numbers of every entry for `symbol`, e.g. both nitrogens of `[NH4^+][NO3^-]`.
    pub fn numbers_for(&self, symbol: &str) -> Vec<i32> {
        self.entries
            .iter()
            .filter(|e| e.symbol() == symbol)
            .map(|e| e.number)
            .collect()
    }

    pub fn weighted_sum(&self) -> i64 {
        self.entries.iter().map(OxidationEntry::weighted).sum()
    }
}

impl fmt::Display for OxidationResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for entry in &self.entries {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
            first = false;
        }
        if let Some(element) = self.unresolved {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{} ?", element.symbol)?;
        }
        Ok(())
    }
}
