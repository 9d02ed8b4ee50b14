use super::config::ConfigError;
use crate::core::models::error::ModelError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Requested {requested} electrons, at most {capacity} fit in the available shells")]
    OutOfRange { requested: i64, capacity: u32 },

    #[error("Model error: {source}")]
    Model {
        #[from]
        source: ModelError,
    },

    #[error(
        "Cannot assign oxidation numbers in '{compound}': more than one element is unresolved ({})",
        elements.join(", ")
    )]
    UnresolvedAmbiguity {
        compound: String,
        elements: Vec<String>,
    },

    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
