use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Requested {requested} electrons for {target}, which holds at most {capacity}")]
    OutOfRange {
        target: String,
        requested: u32,
        capacity: u32,
    },
}

impl ModelError {
    pub(crate) fn out_of_range(target: impl Into<String>, requested: u32, capacity: u32) -> Self {
        Self::OutOfRange {
            target: target.into(),
            requested,
            capacity,
        }
    }
}
