use thiserror::Error;

/// Result type used by the transport.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running a host context.
#[derive(Debug, Error)]
pub enum Error {
    /// Already started.
    #[error("already started")]
    AlreadyStarted,

    /// No tokio runtime to spawn the host context on.
    #[error("host context must be started from within a tokio runtime")]
    NoRuntime,
}
