use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// IO operation failed.
    #[error("{0}: {1}")]
    Io(&'static str, #[source] std::io::Error),

    /// JSON decode error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Logger(#[from] consolebridge_logger::Error),

    #[error("table payload must be a JSON array")]
    NotATable,

    #[error(transparent)]
    SetTracing(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error(transparent)]
    Transport(#[from] consolebridge_transport::Error),
}
