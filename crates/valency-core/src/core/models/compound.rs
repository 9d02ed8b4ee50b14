use super::atom::{Atom, write_charge};
use super::element::Element;
use super::error::ModelError;
use super::ion::Ion;
use std::fmt;

/// Largest proton, electron or neutron total a stack or compound may carry.
///
/// Keeping totals within `i32` lets every net charge be represented exactly.
pub const MAX_PARTICLES: u32 = i32::MAX as u32;

/// Anything that can be stacked inside a compound: a single atom or a nested compound.
#[derive(Debug, Clone, PartialEq)]
pub enum AtomicUnit<'t> {
    Atom(Atom<'t>),
    Compound(Compound<'t>),
}

impl<'t> AtomicUnit<'t> {
    pub fn protons(&self) -> u32 {
        match self {
            AtomicUnit::Atom(atom) => atom.protons(),
            AtomicUnit::Compound(compound) => compound.protons(),
        }
    }

    pub fn electrons(&self) -> u32 {
        match self {
            AtomicUnit::Atom(atom) => atom.electrons(),
            AtomicUnit::Compound(compound) => compound.electrons(),
        }
    }

    pub fn neutrons(&self) -> u32 {
        match self {
            AtomicUnit::Atom(atom) => atom.neutrons(),
            AtomicUnit::Compound(compound) => compound.neutrons(),
        }
    }

    /// Net charge, protons minus electrons.
    pub fn charge(&self) -> i32 {
        match self {
            AtomicUnit::Atom(atom) => atom.charge(),
            AtomicUnit::Compound(compound) => compound.net_charge(),
        }
    }

    /// Distinct elements in first-seen order.
    pub fn elements(&self) -> Vec<&'t Element> {
        match self {
            AtomicUnit::Atom(atom) => vec![atom.element()],
            AtomicUnit::Compound(compound) => compound.elements(),
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, AtomicUnit::Compound(_))
    }

    pub fn is_ion(&self) -> bool {
        self.protons() != self.electrons()
    }

    pub fn as_atom(&self) -> Option<&Atom<'t>> {
        match self {
            AtomicUnit::Atom(atom) => Some(atom),
            AtomicUnit::Compound(_) => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound<'t>> {
        match self {
            AtomicUnit::Atom(_) => None,
            AtomicUnit::Compound(compound) => Some(compound),
        }
    }

    /// Wraps the unit as an [`Ion`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] if the unit carries no net charge.
    pub fn into_ion(self) -> Result<Ion<'t>, ModelError> {
        Ion::new(self)
    }
}

impl<'t> From<Atom<'t>> for AtomicUnit<'t> {
    fn from(atom: Atom<'t>) -> Self {
        AtomicUnit::Atom(atom)
    }
}

impl<'t> From<Compound<'t>> for AtomicUnit<'t> {
    fn from(compound: Compound<'t>) -> Self {
        AtomicUnit::Compound(compound)
    }
}

impl fmt::Display for AtomicUnit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomicUnit::Atom(atom) if atom.charge() == 0 => write!(f, "{atom}"),
            AtomicUnit::Atom(atom) => write!(f, "[{atom}]"),
            AtomicUnit::Compound(compound) => write!(f, "[{compound}]"),
        }
    }
}

/// A quantity of one atomic unit inside a compound, e.g. the `O4` in `H2SO4`.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<'t> {
    unit: AtomicUnit<'t>,
    quantity: u32,
}

impl<'t> Stack<'t> {
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] when `quantity` is zero or the stack
    /// would hold more than [`MAX_PARTICLES`] of any particle.
    pub fn new(unit: impl Into<AtomicUnit<'t>>, quantity: u32) -> Result<Self, ModelError> {
        if quantity == 0 {
            return Err(ModelError::InvalidInput(
                "stack quantity must be at least 1".to_string(),
            ));
        }
        let stack = Self {
            unit: unit.into(),
            quantity,
        };
        stack.check_totals()?;
        Ok(stack)
    }

    pub fn single(unit: impl Into<AtomicUnit<'t>>) -> Self {
        Self {
            unit: unit.into(),
            quantity: 1,
        }
    }

    pub fn unit(&self) -> &AtomicUnit<'t> {
        &self.unit
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn protons(&self) -> u32 {
        self.quantity * self.unit.protons()
    }

    pub fn electrons(&self) -> u32 {
        self.quantity * self.unit.electrons()
    }

    pub fn neutrons(&self) -> u32 {
        self.quantity * self.unit.neutrons()
    }

    fn totals(&self) -> [(&'static str, u64); 3] {
        let quantity = u64::from(self.quantity);
        [
            ("protons", quantity * u64::from(self.unit.protons())),
            ("electrons", quantity * u64::from(self.unit.electrons())),
            ("neutrons", quantity * u64::from(self.unit.neutrons())),
        ]
    }

    fn check_totals(&self) -> Result<(), ModelError> {
        for (particle, total) in self.totals() {
            if total > u64::from(MAX_PARTICLES) {
                return Err(ModelError::InvalidInput(format!(
                    "{} x {} holds {total} {particle}, more than {MAX_PARTICLES}",
                    self.quantity, self.unit
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Stack<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.unit)?;
        if self.quantity > 1 {
            write!(f, "{}", self.quantity)?;
        }
        Ok(())
    }
}

/// An ordered collection of stacks with an explicit net charge.
///
/// Stacks of the same single atom species are merged when the compound is built,
/// so `[O, H, O]` becomes `[O2, H]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Compound<'t> {
    stacks: Vec<Stack<'t>>,
    charge: i32,
}

impl<'t> Compound<'t> {
    /// Builds a neutral compound.
    pub fn new(stacks: Vec<Stack<'t>>) -> Result<Self, ModelError> {
        Self::with_charge(stacks, 0)
    }

    /// Builds a compound whose electron total is shifted by `-charge`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] for an empty stack list, when the
    /// charge would leave the compound with a negative number of electrons, or
    /// when any particle total exceeds [`MAX_PARTICLES`].
    pub fn with_charge(stacks: Vec<Stack<'t>>, charge: i32) -> Result<Self, ModelError> {
        if stacks.is_empty() {
            return Err(ModelError::InvalidInput(
                "a compound needs at least one stack".to_string(),
            ));
        }
        let stacks = canonicalize(stacks)?;

        let mut totals = [("protons", 0u64), ("electrons", 0u64), ("neutrons", 0u64)];
        for stack in &stacks {
            for (sum, (_, value)) in totals.iter_mut().zip(stack.totals()) {
                sum.1 += value;
            }
        }
        let bound_electrons = totals[1].1 as i64;
        let electrons = bound_electrons - i64::from(charge);
        if electrons < 0 {
            return Err(ModelError::InvalidInput(format!(
                "a charge of {charge:+} exceeds the {bound_electrons} electrons of the compound"
            )));
        }
        totals[1].1 = electrons as u64;
        for (particle, total) in totals {
            if total > u64::from(MAX_PARTICLES) {
                return Err(ModelError::InvalidInput(format!(
                    "compound holds {total} {particle}, more than {MAX_PARTICLES}"
                )));
            }
        }
        Ok(Self { stacks, charge })
    }

    pub fn stacks(&self) -> &[Stack<'t>] {
        &self.stacks
    }

    /// The charge given at construction, not including charges of nested units.
    pub fn explicit_charge(&self) -> i32 {
        self.charge
    }

    pub fn protons(&self) -> u32 {
        self.stacks.iter().map(Stack::protons).sum()
    }

    pub fn electrons(&self) -> u32 {
        let bound: i64 = self.stacks.iter().map(|s| i64::from(s.electrons())).sum();
        (bound - i64::from(self.charge)) as u32
    }

    pub fn neutrons(&self) -> u32 {
        self.stacks.iter().map(Stack::neutrons).sum()
    }

    /// Net charge of the whole tree, protons minus electrons.
    pub fn net_charge(&self) -> i32 {
        (i64::from(self.protons()) - i64::from(self.electrons())) as i32
    }

    pub fn is_ion(&self) -> bool {
        self.protons() != self.electrons()
    }

    /// Distinct elements of the whole tree in first-seen order.
    pub fn elements(&self) -> Vec<&'t Element> {
        let mut seen: Vec<&'t Element> = Vec::new();
        for element in self.stacks.iter().flat_map(|s| s.unit().elements()) {
            if !seen.iter().any(|e| e.atomic_number == element.atomic_number) {
                seen.push(element);
            }
        }
        seen
    }

    pub fn contains_element(&self, atomic_number: u8) -> bool {
        self.elements()
            .iter()
            .any(|e| e.atomic_number == atomic_number)
    }

    pub fn contains_metal(&self) -> bool {
        self.elements().iter().any(|e| e.is_metal())
    }

    /// Total number of atoms in the tree, counting quantities.
    ///
    /// Never more than [`Compound::protons`], since every atom holds a proton.
    pub fn atom_count(&self) -> u32 {
        self.stacks
            .iter()
            .map(|s| match s.unit() {
                AtomicUnit::Atom(_) => s.quantity(),
                AtomicUnit::Compound(inner) => s.quantity() * inner.atom_count(),
            })
            .sum()
    }

    /// Total standard atomic weight, or `None` if any element lacks one.
    pub fn atomic_weight(&self) -> Option<f64> {
        self.stacks.iter().try_fold(0.0, |acc, s| {
            let unit_weight = match s.unit() {
                AtomicUnit::Atom(atom) => atom.element().atomic_weight?,
                AtomicUnit::Compound(inner) => inner.atomic_weight()?,
            };
            Some(acc + unit_weight * f64::from(s.quantity()))
        })
    }
}

impl fmt::Display for Compound<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stack in &self.stacks {
            write!(f, "{stack}")?;
        }
        write_charge(f, self.charge)
    }
}

/// Merges stacks holding the same single atom species, keeping first positions.
///
/// # Errors
///
/// Returns [`ModelError::InvalidInput`] when a merged stack exceeds
/// [`MAX_PARTICLES`].
pub fn canonicalize<'t>(stacks: Vec<Stack<'t>>) -> Result<Vec<Stack<'t>>, ModelError> {
    let mut merged: Vec<Stack<'t>> = Vec::with_capacity(stacks.len());
    for stack in stacks {
        let existing = match stack.unit() {
            AtomicUnit::Atom(atom) => merged.iter_mut().find(|m| {
                m.unit()
                    .as_atom()
                    .is_some_and(|other| other.same_species(atom))
            }),
            AtomicUnit::Compound(_) => None,
        };
        match existing {
            Some(target) => {
                target.quantity = target.quantity.checked_add(stack.quantity).ok_or_else(|| {
                    ModelError::InvalidInput(format!(
                        "merged quantity of {} overflows",
                        stack.unit
                    ))
                })?;
                target.check_totals()?;
            }
            None => merged.push(stack),
        }
    }
    Ok(merged)
}
