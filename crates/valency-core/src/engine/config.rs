use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest oxidation number tried by [`SolveStrategy::DownwardScan`].
pub const DEFAULT_SEARCH_UPPER_BOUND: i32 = 255;
/// Lowest oxidation number tried by [`SolveStrategy::DownwardScan`].
///
/// The scan covers 511 candidates rather than the 256 of a scan from 255 down
/// to 0, because the balancing element may need a negative number: nitrogen is
/// -3 in `NH3` and carbon is -4 in `CH4`.
pub const DEFAULT_SEARCH_LOWER_BOUND: i32 = -255;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Search lower bound {lower} is above the upper bound {upper}")]
    InvalidBounds { lower: i32, upper: i32 },
}

/// How the single unknown oxidation number of a compound is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum SolveStrategy {
    /// Tries every integer from the upper bound downwards and keeps the first
    /// that balances the compound.
    #[default]
    #[serde(rename = "scan", alias = "downward-scan")]
    DownwardScan,
    /// Divides the missing charge by the stack quantity, failing when it does
    /// not divide evenly or falls outside the bounds.
    #[serde(rename = "closed-form")]
    ClosedForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SolverConfig {
    pub strategy: SolveStrategy,
    pub search_upper_bound: i32,
    pub search_lower_bound: i32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: SolveStrategy::default(),
            search_upper_bound: DEFAULT_SEARCH_UPPER_BOUND,
            search_lower_bound: DEFAULT_SEARCH_LOWER_BOUND,
        }
    }
}

#[derive(Default)]
pub struct SolverConfigBuilder {
    strategy: Option<SolveStrategy>,
    search_upper_bound: Option<i32>,
    search_lower_bound: Option<i32>,
}

impl SolverConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: SolveStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn search_upper_bound(mut self, bound: i32) -> Self {
        self.search_upper_bound = Some(bound);
        self
    }
    pub fn search_lower_bound(mut self, bound: i32) -> Self {
        self.search_lower_bound = Some(bound);
        self
    }

    pub fn build(self) -> Result<SolverConfig, ConfigError> {
        let defaults = SolverConfig::default();
        let upper = self.search_upper_bound.unwrap_or(defaults.search_upper_bound);
        let lower = self.search_lower_bound.unwrap_or(defaults.search_lower_bound);
        if lower > upper {
            return Err(ConfigError::InvalidBounds { lower, upper });
        }
        Ok(SolverConfig {
            strategy: self.strategy.unwrap_or(defaults.strategy),
            search_upper_bound: upper,
            search_lower_bound: lower,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_falls_back_to_defaults() {
        let config = SolverConfigBuilder::new().build().unwrap();
        assert_eq!(config, SolverConfig::default());
        assert_eq!(config.strategy, SolveStrategy::DownwardScan);
        assert_eq!(config.search_upper_bound, 255);
        assert_eq!(config.search_lower_bound, -255);
    }

    #[test]
    fn builder_applies_overrides() {
        let config = SolverConfigBuilder::new()
            .strategy(SolveStrategy::ClosedForm)
            .search_upper_bound(8)
            .search_lower_bound(-4)
            .build()
            .unwrap();
        assert_eq!(config.strategy, SolveStrategy::ClosedForm);
        assert_eq!(config.search_upper_bound, 8);
        assert_eq!(config.search_lower_bound, -4);
    }

    #[test]
    fn builder_rejects_inverted_bounds() {
        let result = SolverConfigBuilder::new()
            .search_upper_bound(-1)
            .search_lower_bound(1)
            .build();
        assert_eq!(result, Err(ConfigError::InvalidBounds { lower: 1, upper: -1 }));
    }

    #[test]
    fn strategy_names_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            strategy: SolveStrategy,
        }
        let scan: Wrapper = toml::from_str("strategy = \"scan\"").unwrap();
        assert_eq!(scan.strategy, SolveStrategy::DownwardScan);
        let closed: Wrapper = toml::from_str("strategy = \"closed-form\"").unwrap();
        assert_eq!(closed.strategy, SolveStrategy::ClosedForm);
    }
}
