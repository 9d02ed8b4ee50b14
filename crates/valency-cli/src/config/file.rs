use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use valency::engine::config::SolveStrategy;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileSolverConfig {
    pub strategy: Option<SolveStrategy>,
    #[serde(rename = "search-upper-bound")]
    pub search_upper_bound: Option<i32>,
    #[serde(rename = "search-lower-bound")]
    pub search_lower_bound: Option<i32>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(rename = "elements-path")]
    pub elements_path: Option<PathBuf>,
    pub solver: Option<FileSolverConfig>,
}

impl FileConfig {
    /// Reads a config file; a relative `elements-path` is taken relative to the file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        if let (Some(elements), Some(dir)) = (&config.elements_path, path.parent()) {
            if elements.is_relative() {
                config.elements_path = Some(dir.join(elements));
            }
        }
        Ok(config)
    }
}
