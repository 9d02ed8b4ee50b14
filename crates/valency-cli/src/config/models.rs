use crate::error::{CliError, Result};
use std::path::PathBuf;
use tracing::info;
use valency::core::table::PeriodicTable;
use valency::engine::config::{SolveStrategy, SolverConfig};

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub elements_path: Option<PathBuf>,
    pub strategy: Option<SolveStrategy>,
    pub search_upper_bound: Option<i32>,
    pub search_lower_bound: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub elements_path: Option<PathBuf>,
    pub solver: SolverConfig,
}

impl AppConfig {
    /// The configured element table, or the built-in one.
    pub fn load_table(&self) -> Result<PeriodicTable> {
        match &self.elements_path {
            Some(path) => {
                info!("Loading element table from {:?}", path);
                PeriodicTable::load(path).map_err(|e| CliError::FileParsing {
                    path: path.clone(),
                    source: e.into(),
                })
            }
            None => Ok(PeriodicTable::builtin()),
        }
    }
}
