use super::element::Element;
use super::error::ModelError;
use std::fmt;

/// A single atom of an element, optionally carrying a net charge.
///
/// The element data is borrowed from the [`PeriodicTable`](crate::core::table::PeriodicTable)
/// the atom was created from, so atoms are cheap to copy around while building compounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom<'t> {
    element: &'t Element,
    charge: i32,
}

impl<'t> Atom<'t> {
    /// Creates a neutral atom.
    pub fn new(element: &'t Element) -> Self {
        Self { element, charge: 0 }
    }

    /// Creates an atom with the given net charge (positive for cations).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] if the charge would leave the atom with
    /// fewer than zero electrons.
    pub fn with_charge(element: &'t Element, charge: i32) -> Result<Self, ModelError> {
        let electrons = i64::from(element.atomic_number) - i64::from(charge);
        if electrons < 0 {
            return Err(ModelError::InvalidInput(format!(
                "a charge of {charge:+} would leave {} with {electrons} electrons",
                element.symbol
            )));
        }
        Ok(Self { element, charge })
    }

    pub fn element(&self) -> &'t Element {
        self.element
    }

    pub fn atomic_number(&self) -> u8 {
        self.element.atomic_number
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    pub fn protons(&self) -> u32 {
        self.element.protons()
    }

    pub fn electrons(&self) -> u32 {
        // Non-negative by construction.
        (i64::from(self.protons()) - i64::from(self.charge)) as u32
    }

    pub fn neutrons(&self) -> u32 {
        self.element.neutrons()
    }

    pub fn is_ion(&self) -> bool {
        self.electrons() != self.protons()
    }

    pub fn is_cation(&self) -> bool {
        self.charge > 0
    }

    pub fn is_anion(&self) -> bool {
        self.charge < 0
    }

    /// Whether two atoms are of the same element with the same charge.
    pub fn same_species(&self, other: &Atom<'_>) -> bool {
        self.atomic_number() == other.atomic_number() && self.charge == other.charge
    }
}

impl fmt::Display for Atom<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.element.symbol)?;
        write_charge(f, self.charge)
    }
}

/// Writes a charge suffix in the `^2-` / `^+` style understood by the formula parser.
pub(crate) fn write_charge(f: &mut fmt::Formatter<'_>, charge: i32) -> fmt::Result {
    let sign = if charge > 0 { '+' } else { '-' };
    match charge.unsigned_abs() {
        0 => Ok(()),
        1 => write!(f, "^{sign}"),
        n => write!(f, "^{n}{sign}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::ElementCategory;

    fn oxygen() -> Element {
        Element {
            atomic_number: 8,
            symbol: "O".to_string(),
            name: "Oxygen".to_string(),
            group: Some(16),
            period: 2,
            category: ElementCategory::ReactiveNonmetal,
            atomic_weight: Some(15.999),
        }
    }

    #[test]
    fn neutral_atom_has_equal_protons_and_electrons() {
        let element = oxygen();
        let atom = Atom::new(&element);
        assert_eq!(atom.protons(), 8);
        assert_eq!(atom.electrons(), 8);
        assert_eq!(atom.neutrons(), 8);
        assert!(!atom.is_ion());
    }

    #[test]
    fn charge_adjusts_electron_count() {
        let element = oxygen();
        let anion = Atom::with_charge(&element, -2).unwrap();
        assert_eq!(anion.electrons(), 10);
        assert!(anion.is_ion());
        assert!(anion.is_anion());

        let cation = Atom::with_charge(&element, 3).unwrap();
        assert_eq!(cation.electrons(), 5);
        assert!(cation.is_cation());
    }

    #[test]
    fn fully_stripped_atom_is_allowed() {
        let element = oxygen();
        let bare = Atom::with_charge(&element, 8).unwrap();
        assert_eq!(bare.electrons(), 0);
    }

    #[test]
    fn charge_driving_electrons_negative_is_rejected() {
        let element = oxygen();
        let result = Atom::with_charge(&element, 9);
        assert!(matches!(result, Err(ModelError::InvalidInput(_))));
    }

    #[test]
    fn display_appends_charge_suffix() {
        let element = oxygen();
        assert_eq!(Atom::new(&element).to_string(), "O");
        assert_eq!(Atom::with_charge(&element, -2).unwrap().to_string(), "O^2-");
        assert_eq!(Atom::with_charge(&element, 1).unwrap().to_string(), "O^+");
    }

    #[test]
    fn same_species_compares_element_and_charge() {
        let element = oxygen();
        let a = Atom::new(&element);
        let b = Atom::new(&element);
        let c = Atom::with_charge(&element, -1).unwrap();
        assert!(a.same_species(&b));
        assert!(!a.same_species(&c));
    }
}
