//! Error types for console loggers

use consolebridge_envelope::EncodeError;
use consolebridge_transport::DropReason;
use thiserror::Error;

/// Errors that can occur while sending a record
#[derive(Debug, Error)]
pub enum Error {
    /// The value could not be represented as JSON
    #[error("failed to serialize log value: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The envelope could not be encoded
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The host did not accept the call
    #[error("log record dropped: {0:?}")]
    Dropped(DropReason),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
