use thiserror::Error;

/// Errors raised when site configuration cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be between {min:.2} and {max:.2} (got {value:.2})")]
    RangeViolation {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("contact.recipient is not an email address: {0:?}")]
    Recipient(String),
}

/// Errors raised while handing a contact submission to a channel.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("submission channel failed: {0}")]
    Channel(String),
}
