use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Atomic number of hydrogen.
pub const HYDROGEN: u8 = 1;
/// Atomic number of oxygen.
pub const OXYGEN: u8 = 8;
/// Atomic number of fluorine.
pub const FLUORINE: u8 = 9;

/// The family an element belongs to in the periodic table.
///
/// Metal membership is derived from the category alone, so a table loaded from
/// disk only has to get the category right for hydride detection to work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementCategory {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    ReactiveNonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
    Unknown,
}

const METAL_CATEGORIES: [ElementCategory; 6] = [
    ElementCategory::AlkaliMetal,
    ElementCategory::AlkalineEarthMetal,
    ElementCategory::TransitionMetal,
    ElementCategory::PostTransitionMetal,
    ElementCategory::Lanthanide,
    ElementCategory::Actinide,
];

static CATEGORY_NAMES: Map<&'static str, ElementCategory> = phf_map! {
    "alkali-metal" => ElementCategory::AlkaliMetal,
    "alkaline-earth-metal" => ElementCategory::AlkalineEarthMetal,
    "transition-metal" => ElementCategory::TransitionMetal,
    "post-transition-metal" => ElementCategory::PostTransitionMetal,
    "metalloid" => ElementCategory::Metalloid,
    "reactive-nonmetal" => ElementCategory::ReactiveNonmetal,
    "nonmetal" => ElementCategory::ReactiveNonmetal,
    "diatomic-nonmetal" => ElementCategory::ReactiveNonmetal,
    "polyatomic-nonmetal" => ElementCategory::ReactiveNonmetal,
    "halogen" => ElementCategory::Halogen,
    "noble-gas" => ElementCategory::NobleGas,
    "lanthanide" => ElementCategory::Lanthanide,
    "lanthanoid" => ElementCategory::Lanthanide,
    "actinide" => ElementCategory::Actinide,
    "actinoid" => ElementCategory::Actinide,
    "unknown" => ElementCategory::Unknown,
};

impl ElementCategory {
    pub fn is_metal(self) -> bool {
        METAL_CATEGORIES.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ElementCategory::AlkaliMetal => "alkali-metal",
            ElementCategory::AlkalineEarthMetal => "alkaline-earth-metal",
            ElementCategory::TransitionMetal => "transition-metal",
            ElementCategory::PostTransitionMetal => "post-transition-metal",
            ElementCategory::Metalloid => "metalloid",
            ElementCategory::ReactiveNonmetal => "reactive-nonmetal",
            ElementCategory::Halogen => "halogen",
            ElementCategory::NobleGas => "noble-gas",
            ElementCategory::Lanthanide => "lanthanide",
            ElementCategory::Actinide => "actinide",
            ElementCategory::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown element category: '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for ElementCategory {
    type Err = ParseCategoryError;

    /// Accepts the kebab-case names plus a few common spellings
    /// ("Alkali Metal", "diatomic_nonmetal", "Lanthanoid").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        CATEGORY_NAMES
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static reference data for one chemical element.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Element {
    /// Number of protons; the identity of the element.
    pub atomic_number: u8,
    pub symbol: String,
    pub name: String,
    /// Periodic group 1-18, absent for the f-block.
    #[serde(default)]
    pub group: Option<u8>,
    pub period: u8,
    pub category: ElementCategory,
    /// Standard atomic weight in daltons, absent for elements without stable isotopes data.
    #[serde(default)]
    pub atomic_weight: Option<f64>,
}

impl Element {
    pub fn is_metal(&self) -> bool {
        self.category.is_metal()
    }

    pub fn is_in_group(&self, group: u8) -> bool {
        self.group == Some(group)
    }

    /// Mass number of the most common isotope, approximated by the rounded atomic weight.
    pub fn mass_number(&self) -> u32 {
        self.atomic_weight
            .map(|weight| weight.round().max(0.0) as u32)
            .unwrap_or(0)
    }

    pub fn protons(&self) -> u32 {
        u32::from(self.atomic_number)
    }

    pub fn neutrons(&self) -> u32 {
        self.mass_number().saturating_sub(self.protons())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.name)
    }
}
