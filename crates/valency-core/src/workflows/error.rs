use crate::core::io::formula::FormulaError;
use crate::core::table::TableError;
use crate::engine::error::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Element lookup failed: {source}")]
    Table {
        #[from]
        source: TableError,
    },

    #[error("Could not parse formula '{formula}': {source}")]
    Formula {
        formula: String,
        source: FormulaError,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),
}
