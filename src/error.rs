use thiserror::Error;

/// Errors surfaced by prediction, aggregation, and dataset I/O.
///
/// `InvalidInput` is the only kind the arithmetic itself can raise; it marks a
/// caller bug (mismatched lengths, a zero divisor) and is never recovered from.
#[derive(Debug, Error)]
pub enum SseError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("dataset i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset json is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

impl SseError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SseError::InvalidInput(msg.into())
    }

    /// True for the `InvalidInput` kind.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SseError::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, SseError>;
