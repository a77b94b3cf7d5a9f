use thiserror::Error;

/// Result type for encoding.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Errors that can occur while encoding an envelope.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The value could not be turned into JSON.
    #[error("failed to serialize envelope: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload nests arrays or objects deeper than the given limit.
    #[error("payload nests deeper than {0} levels")]
    TooDeep(usize),
}

/// Why a raw value could not be decoded into an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    /// Nothing was received: no text, blank text, or a JSON `null`.
    #[error("empty")]
    Empty,

    /// Text was received but is not a valid envelope.
    #[error("malformed: {0}")]
    Malformed(String),
}

impl DecodeFailure {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }
}
