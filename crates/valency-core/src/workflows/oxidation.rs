use super::error::WorkflowError;
use crate::core::io::formula;
use crate::core::models::compound::Compound;
use crate::core::table::PeriodicTable;
use crate::engine::config::SolverConfig;
use crate::engine::oxidation::{OxidationResult, OxidationSolver};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct OxidationReport<'t> {
    pub compound: Compound<'t>,
    pub result: OxidationResult<'t>,
}

/// Parses `formula` and assigns oxidation numbers to every atom in it.
#[instrument(skip(table, config), name = "oxidation_workflow")]
pub fn assign<'t>(
    table: &'t PeriodicTable,
    formula: &str,
    config: &SolverConfig,
) -> Result<OxidationReport<'t>, WorkflowError> {
    let compound = formula::parse(table, formula).map_err(|source| WorkflowError::Formula {
        formula: formula.to_string(),
        source,
    })?;
    let result = OxidationSolver::new(*config).solve(&compound)?;

    if result.is_balanced() {
        info!(compound = %compound, numbers = %result, "Assigned oxidation numbers.");
    } else {
        warn!(compound = %compound, numbers = %result, "Oxidation numbers are unbalanced.");
    }
    Ok(OxidationReport { compound, result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::formula::FormulaError;
    use crate::engine::error::EngineError;

    #[test]
    fn assigns_numbers_to_a_formula() {
        let table = PeriodicTable::builtin();
        let report = assign(&table, "H2SO4", &SolverConfig::default()).unwrap();
        assert_eq!(report.compound.to_string(), "H2SO4");
        assert!(report.result.is_balanced());
        assert_eq!(report.result.number_for("S"), Some(6));
    }

    #[test]
    fn parse_errors_keep_the_formula() {
        let table = PeriodicTable::builtin();
        let error = assign(&table, "", &SolverConfig::default()).unwrap_err();
        assert!(matches!(
            error,
            WorkflowError::Formula {
                source: FormulaError::Empty,
                ..
            }
        ));
    }

    #[test]
    fn ambiguity_surfaces_as_engine_error() {
        let table = PeriodicTable::builtin();
        assert!(matches!(
            assign(&table, "CuFeS2", &SolverConfig::default()),
            Err(WorkflowError::Engine(EngineError::UnresolvedAmbiguity { .. }))
        ));
    }

    #[test]
    fn unbalanced_result_is_not_an_error() {
        let table = PeriodicTable::builtin();
        let report = assign(&table, "Fe3O4", &SolverConfig::default()).unwrap();
        assert!(!report.result.is_balanced());
    }
}
