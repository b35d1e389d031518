use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid slice '{label}': {reason}")]
    InvalidSlice { label: String, reason: String },

    #[error("Invalid chart dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    pub fn invalid_slice(label: &str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::warn!("Rejecting pie slice '{}': {}", label, reason);
        ReportError::InvalidSlice {
            label: label.to_string(),
            reason,
        }
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
