//! The log envelope.

use serde::Serialize;
use serde_json::Value;

use crate::channel::{Channel, select_channel};
use crate::codec;
use crate::error::Result;
use crate::payload::{Kind, Payload};
use crate::severity::{LogLevel, Severity};

/// One log event on its way from the runtime to the host console.
///
/// Built once per log call, encoded, sent, and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEnvelope {
    /// Severity of the event, as sent on the wire.
    pub level: LogLevel,
    /// The value to print.
    pub payload: Payload,
    /// Failure detail, if the event came from a caught error.
    ///
    /// `Some("")` means the field was sent but empty, which is not the same
    /// as no exception at all.
    pub exception: Option<String>,
}

impl LogEnvelope {
    /// Creates an envelope without exception detail.
    pub fn new(level: impl Into<LogLevel>, payload: impl Into<Payload>) -> Self {
        Self {
            level: level.into(),
            payload: payload.into(),
            exception: None,
        }
    }

    /// Creates a message envelope.
    pub fn message(level: impl Into<LogLevel>, value: impl Into<Value>) -> Self {
        Self::new(level, Payload::Scalar(value.into()))
    }

    /// Creates a table envelope from rows.
    pub fn table<I>(level: impl Into<LogLevel>, rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::new(
            level,
            Payload::Tabular(rows.into_iter().map(Into::into).collect()),
        )
    }

    /// Creates a table envelope by serializing each row.
    ///
    /// # Errors
    ///
    /// Returns an error if a row can't be represented as JSON.
    pub fn table_from<T: Serialize>(level: impl Into<LogLevel>, rows: &[T]) -> Result<Self> {
        let rows = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self::new(level, Payload::Tabular(rows)))
    }

    /// Attaches exception detail.
    #[must_use]
    pub fn with_exception(mut self, exception: impl Into<String>) -> Self {
        self.exception = Some(exception.into());
        self
    }

    /// Known severity of the event, or `None` for a level this crate doesn't
    /// know.
    #[must_use]
    pub const fn severity(&self) -> Option<Severity> {
        self.level.severity()
    }

    /// Kind implied by the payload.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.payload.kind()
    }

    /// Console channel this envelope should be written to.
    #[must_use]
    pub const fn channel(&self) -> Channel {
        select_channel(self.kind(), self.level)
    }

    /// Encodes the envelope into its wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn encode(&self) -> Result<String> {
        codec::encode(self)
    }
}
