use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricError {
    #[error("Invalid input for {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: String,
    },

    #[error("Unknown validation policy: {0}")]
    UnknownPolicy(String),

    #[error("Roster CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MetricError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: impl Into<String>) -> Self {
        MetricError::InvalidInput {
            field,
            value,
            reason: reason.into(),
        }
    }

    /// True for the `InvalidInput` kind.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, MetricError::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, MetricError>;
