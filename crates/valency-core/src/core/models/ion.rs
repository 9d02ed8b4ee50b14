use super::compound::AtomicUnit;
use super::error::ModelError;
use std::fmt;

/// An atom or compound whose electron count differs from its proton count.
#[derive(Debug, Clone, PartialEq)]
pub struct Ion<'t> {
    content: AtomicUnit<'t>,
}

impl<'t> Ion<'t> {
    pub fn new(content: AtomicUnit<'t>) -> Result<Self, ModelError> {
        if !content.is_ion() {
            return Err(ModelError::InvalidInput(format!(
                "'{content}' carries no net charge and cannot be treated as an ion"
            )));
        }
        Ok(Self { content })
    }

    pub fn content(&self) -> &AtomicUnit<'t> {
        &self.content
    }

    pub fn into_content(self) -> AtomicUnit<'t> {
        self.content
    }

    pub fn charge(&self) -> i32 {
        self.content.charge()
    }

    pub fn is_cation(&self) -> bool {
        self.charge() > 0
    }

    pub fn is_anion(&self) -> bool {
        self.charge() < 0
    }

    pub fn is_monatomic(&self) -> bool {
        !self.content.is_compound()
    }

    pub fn is_polyatomic(&self) -> bool {
        self.content
            .as_compound()
            .is_some_and(|compound| compound.atom_count() > 1)
    }
}

impl fmt::Display for Ion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::compound::{Compound, Stack};
    use crate::core::table::PeriodicTable;

    #[test]
    fn neutral_unit_cannot_become_an_ion() {
        let table = PeriodicTable::builtin();
        let unit = AtomicUnit::from(table.atom("Na").unwrap());
        assert!(matches!(unit.into_ion(), Err(ModelError::InvalidInput(_))));
    }

    #[test]
    fn monatomic_cation_is_classified() {
        let table = PeriodicTable::builtin();
        let sodium = Atom::with_charge(table.by_symbol("Na").unwrap(), 1).unwrap();
        let ion = AtomicUnit::from(sodium).into_ion().unwrap();
        assert_eq!(ion.charge(), 1);
        assert!(ion.is_cation());
        assert!(ion.is_monatomic());
        assert!(!ion.is_polyatomic());
    }

    #[test]
    fn polyatomic_anion_is_classified() {
        let table = PeriodicTable::builtin();
        let nitrate = Compound::with_charge(
            vec![
                Stack::single(table.atom("N").unwrap()),
                Stack::new(table.atom("O").unwrap(), 3).unwrap(),
            ],
            -1,
        )
        .unwrap();
        let ion = Ion::new(nitrate.into()).unwrap();
        assert_eq!(ion.charge(), -1);
        assert!(ion.is_anion());
        assert!(ion.is_polyatomic());
        assert!(!ion.is_monatomic());
        assert_eq!(ion.to_string(), "[NO3^-]");
    }
}
