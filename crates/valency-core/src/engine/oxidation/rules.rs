use crate::core::models::compound::Compound;
use crate::core::models::element::{Element, FLUORINE, HYDROGEN, OXYGEN};
use serde::Serialize;
use std::fmt;

/// The rule that fixed an oxidation number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OxidationRule {
    /// Hydrogen bound to non-metals, +1.
    Hydrogen,
    /// Hydrogen in a compound containing a metal, -1.
    Hydride,
    /// Fluorine without a group in the loaded table, -1.
    Fluorine,
    /// Group 1 elements, +1.
    AlkaliMetal,
    /// Group 2 elements, +2.
    AlkalineEarthMetal,
    /// Group 17 elements in compounds without oxygen, -1.
    Halide,
    /// Oxygen, -2.
    Oxide,
    /// Derived from the charge left over by every other atom.
    Balance,
}

impl OxidationRule {
    pub fn as_str(self) -> &'static str {
        match self {
            OxidationRule::Hydrogen => "hydrogen",
            OxidationRule::Hydride => "hydride",
            OxidationRule::Fluorine => "fluorine",
            OxidationRule::AlkaliMetal => "alkali-metal",
            OxidationRule::AlkalineEarthMetal => "alkaline-earth-metal",
            OxidationRule::Halide => "halide",
            OxidationRule::Oxide => "oxide",
            OxidationRule::Balance => "balance",
        }
    }
}

impl fmt::Display for OxidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Fixed { number: i32, rule: OxidationRule },
    Deferred,
}

/// Facts about the enclosing compound that the rules depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleContext {
    pub contains_metal: bool,
    pub contains_oxygen: bool,
}

impl RuleContext {
    pub fn of(compound: &Compound<'_>) -> Self {
        let elements = compound.elements();
        Self {
            contains_metal: elements.iter().any(|e| e.is_metal()),
            contains_oxygen: elements.iter().any(|e| e.atomic_number == OXYGEN),
        }
    }
}

/// Applies the fixed rules in priority order; the first match wins.
pub fn classify(element: &Element, context: RuleContext) -> Classification {
    let fixed = |number, rule| Classification::Fixed { number, rule };
    match element.atomic_number {
        HYDROGEN if context.contains_metal => return fixed(-1, OxidationRule::Hydride),
        HYDROGEN => return fixed(1, OxidationRule::Hydrogen),
        _ => {}
    }
    match element.group {
        Some(1) => return fixed(1, OxidationRule::AlkaliMetal),
        Some(2) => return fixed(2, OxidationRule::AlkalineEarthMetal),
        Some(17) if context.contains_oxygen => return Classification::Deferred,
        Some(17) => return fixed(-1, OxidationRule::Halide),
        _ => {}
    }
    match element.atomic_number {
        OXYGEN => fixed(-2, OxidationRule::Oxide),
        FLUORINE => fixed(-1, OxidationRule::Fluorine),
        _ => Classification::Deferred,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::PeriodicTable;

    const PLAIN: RuleContext = RuleContext {
        contains_metal: false,
        contains_oxygen: false,
    };

    fn classify_symbol(symbol: &str, context: RuleContext) -> Classification {
        let table = PeriodicTable::builtin();
        classify(table.by_symbol(symbol).unwrap(), context)
    }

    #[test]
    fn hydrogen_depends_on_metal_presence() {
        assert_eq!(
            classify_symbol("H", PLAIN),
            Classification::Fixed { number: 1, rule: OxidationRule::Hydrogen }
        );
        let with_metal = RuleContext { contains_metal: true, ..PLAIN };
        assert_eq!(
            classify_symbol("H", with_metal),
            Classification::Fixed { number: -1, rule: OxidationRule::Hydride }
        );
    }

    #[test]
    fn fluorine_follows_the_halogen_rule() {
        let with_oxygen = RuleContext { contains_oxygen: true, ..PLAIN };
        assert_eq!(classify_symbol("F", with_oxygen), Classification::Deferred);
        assert_eq!(
            classify_symbol("F", PLAIN),
            Classification::Fixed { number: -1, rule: OxidationRule::Halide }
        );
    }

    #[test]
    fn fluorine_without_a_group_is_minus_one() {
        let mut fluorine = PeriodicTable::builtin().by_symbol("F").unwrap().clone();
        fluorine.group = None;
        assert_eq!(
            classify(&fluorine, PLAIN),
            Classification::Fixed { number: -1, rule: OxidationRule::Fluorine }
        );
    }

    #[test]
    fn group_rules_apply() {
        assert_eq!(
            classify_symbol("K", PLAIN),
            Classification::Fixed { number: 1, rule: OxidationRule::AlkaliMetal }
        );
        assert_eq!(
            classify_symbol("Ba", PLAIN),
            Classification::Fixed { number: 2, rule: OxidationRule::AlkalineEarthMetal }
        );
        assert_eq!(
            classify_symbol("Br", PLAIN),
            Classification::Fixed { number: -1, rule: OxidationRule::Halide }
        );
    }

    #[test]
    fn halogens_are_deferred_next_to_oxygen() {
        let with_oxygen = RuleContext { contains_oxygen: true, ..PLAIN };
        assert_eq!(classify_symbol("Cl", with_oxygen), Classification::Deferred);
    }

    #[test]
    fn oxygen_is_minus_two_and_others_are_deferred() {
        assert_eq!(
            classify_symbol("O", PLAIN),
            Classification::Fixed { number: -2, rule: OxidationRule::Oxide }
        );
        assert_eq!(classify_symbol("S", PLAIN), Classification::Deferred);
        assert_eq!(classify_symbol("Fe", PLAIN), Classification::Deferred);
        assert_eq!(classify_symbol("Ce", PLAIN), Classification::Deferred);
    }

    #[test]
    fn context_reflects_the_whole_tree() {
        let table = PeriodicTable::builtin();
        let compound = crate::core::io::formula::parse(&table, "Na[ClO4^-]").unwrap();
        let context = RuleContext::of(&compound);
        assert!(context.contains_metal);
        assert!(context.contains_oxygen);
    }
}
