use super::file::FileConfig;
use super::models::{AppConfig, ConfigOverrides};
use crate::error::{CliError, Result};
use valency::engine::config::SolverConfigBuilder;

/// Merges defaults, the optional config file and command-line overrides, in
/// increasing order of precedence.
pub fn build_config(overrides: &ConfigOverrides) -> Result<AppConfig> {
    let mut file_config = match &overrides.config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let solver_file = file_config.solver.take().unwrap_or_default();

    let mut solver = SolverConfigBuilder::new();
    if let Some(strategy) = overrides.strategy.or(solver_file.strategy) {
        solver = solver.strategy(strategy);
    }
    if let Some(bound) = overrides
        .search_upper_bound
        .or(solver_file.search_upper_bound)
    {
        solver = solver.search_upper_bound(bound);
    }
    if let Some(bound) = overrides
        .search_lower_bound
        .or(solver_file.search_lower_bound)
    {
        solver = solver.search_lower_bound(bound);
    }
    let solver = solver
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let elements_path = overrides
        .elements_path
        .clone()
        .or(file_config.elements_path);
    if let Some(path) = &elements_path {
        if !path.exists() {
            return Err(CliError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Provided path does not exist: {}", path.display()),
            )));
        }
    }

    Ok(AppConfig {
        elements_path,
        solver,
    })
}
