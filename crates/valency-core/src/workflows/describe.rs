use super::error::WorkflowError;
use crate::core::models::atom::Atom;
use crate::core::models::configuration::{Magnetism, ShellConfiguration};
use crate::core::table::PeriodicTable;
use crate::engine::filler::ShellFiller;
use tracing::{info, instrument};

/// The electron structure of one atom or monatomic ion.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomReport<'t> {
    pub atom: Atom<'t>,
    pub configuration: ShellConfiguration,
    pub magnetism: Magnetism,
}

impl AtomReport<'_> {
    /// Label and electron count of the outermost populated shell.
    pub fn valence(&self) -> Option<(char, u32)> {
        self.configuration
            .valence_shell()
            .map(|shell| (shell.label(), shell.electron_count()))
    }
}

#[instrument(skip(table), name = "describe_workflow")]
pub fn describe_atom<'t>(
    table: &'t PeriodicTable,
    symbol: &str,
    charge: i32,
) -> Result<AtomReport<'t>, WorkflowError> {
    let atom = table.ion(symbol, charge)?;
    let configuration = ShellFiller::configure(&atom)?;
    let magnetism = configuration.magnetism();
    info!(
        atom = %atom,
        electrons = atom.electrons(),
        configuration = %configuration,
        "Configured atom."
    );
    Ok(AtomReport {
        atom,
        configuration,
        magnetism,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::TableError;

    #[test]
    fn describes_a_neutral_atom() {
        let table = PeriodicTable::builtin();
        let report = describe_atom(&table, "Al", 0).unwrap();
        assert_eq!(report.atom.electrons(), 13);
        assert_eq!(report.valence(), Some(('M', 3)));
        assert_eq!(report.magnetism, Magnetism::Paramagnetic);
    }

    #[test]
    fn charge_changes_the_configuration() {
        let table = PeriodicTable::builtin();
        let report = describe_atom(&table, "Na", 1).unwrap();
        assert_eq!(report.configuration.electron_count(), 10);
        assert_eq!(report.valence(), Some(('L', 8)));
        assert_eq!(report.magnetism, Magnetism::Diamagnetic);
    }

    #[test]
    fn fully_ionised_atom_has_no_valence_shell() {
        let table = PeriodicTable::builtin();
        let report = describe_atom(&table, "H", 1).unwrap();
        assert!(report.valence().is_none());
    }

    #[test]
    fn unknown_symbol_is_reported() {
        let table = PeriodicTable::builtin();
        assert!(matches!(
            describe_atom(&table, "Qq", 0),
            Err(WorkflowError::Table {
                source: TableError::UnknownSymbol(_)
            })
        ));
    }

    #[test]
    fn impossible_charge_is_reported() {
        let table = PeriodicTable::builtin();
        assert!(matches!(
            describe_atom(&table, "He", 3),
            Err(WorkflowError::Table {
                source: TableError::Model(_)
            })
        ));
    }

    #[test]
    fn oversized_anion_is_out_of_range() {
        let table = PeriodicTable::builtin();
        assert!(matches!(
            describe_atom(&table, "Og", -40),
            Err(WorkflowError::Engine(_))
        ));
    }
}
