//! Category logger

use std::error::Error as StdError;
use std::sync::Arc;

use consolebridge_envelope::{LogEnvelope, Severity};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::exception::render_exception;
use crate::provider::ConsoleLoggerProvider;

/// Logger for one category.
///
/// Cheap to clone. Every record that passes the provider's filter is encoded
/// and handed to the host without waiting for it to be written.
#[derive(Clone, Debug)]
pub struct ConsoleLogger {
    category: Arc<str>,
    provider: ConsoleLoggerProvider,
}

impl ConsoleLogger {
    pub(crate) fn new(category: String, provider: ConsoleLoggerProvider) -> Self {
        Self {
            category: category.into(),
            provider,
        }
    }

    /// Category the logger was created for.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Whether a record at `severity` would be sent.
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.provider.is_enabled(&self.category, severity)
    }

    /// Log a text message, optionally with the error that caused it.
    pub fn log(
        &self,
        severity: Severity,
        message: impl Into<String>,
        exception: Option<&(dyn StdError + 'static)>,
    ) {
        if let Err(e) = self.try_log(severity, message, exception) {
            debug!(category = %self.category, "failed to send log record: {e}");
        }
    }

    /// Like [`log`](Self::log) but reports why a record was not sent.
    ///
    /// Returns `Ok(())` for records filtered out.
    ///
    /// # Errors
    ///
    /// Returns an error if the record could not be encoded or the host did not
    /// accept it.
    pub fn try_log(
        &self,
        severity: Severity,
        message: impl Into<String>,
        exception: Option<&(dyn StdError + 'static)>,
    ) -> Result<()> {
        if !self.is_enabled(severity) {
            return Ok(());
        }

        let mut envelope = LogEnvelope::message(severity, message.into());
        if let Some(error) = exception {
            envelope = envelope.with_exception(render_exception(error));
        }

        self.provider.send(&envelope)
    }

    /// Log any serializable value as the message payload.
    pub fn log_value<T: Serialize + ?Sized>(
        &self,
        severity: Severity,
        value: &T,
        exception: Option<&(dyn StdError + 'static)>,
    ) {
        if let Err(e) = self.try_log_value(severity, value, exception) {
            debug!(category = %self.category, "failed to send log value: {e}");
        }
    }

    /// Like [`log_value`](Self::log_value) but reports why a record was not sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the value can't be represented as JSON, nests deeper
    /// than [`MAX_PAYLOAD_DEPTH`](consolebridge_envelope::MAX_PAYLOAD_DEPTH), or
    /// the host did not accept the record.
    pub fn try_log_value<T: Serialize + ?Sized>(
        &self,
        severity: Severity,
        value: &T,
        exception: Option<&(dyn StdError + 'static)>,
    ) -> Result<()> {
        if !self.is_enabled(severity) {
            return Ok(());
        }

        let mut envelope = LogEnvelope::message(severity, serde_json::to_value(value)?);
        if let Some(error) = exception {
            envelope = envelope.with_exception(render_exception(error));
        }

        self.provider.send(&envelope)
    }

    /// Log rows to be shown as a table.
    pub fn log_table<T: Serialize>(&self, severity: Severity, rows: &[T]) {
        if let Err(e) = self.try_log_table(severity, rows) {
            debug!(category = %self.category, "failed to send log table: {e}");
        }
    }

    /// Like [`log_table`](Self::log_table) but reports why a record was not sent.
    ///
    /// # Errors
    ///
    /// Returns an error if a row can't be represented as JSON or the host did
    /// not accept the record.
    pub fn try_log_table<T: Serialize>(&self, severity: Severity, rows: &[T]) -> Result<()> {
        if !self.is_enabled(severity) {
            return Ok(());
        }

        let envelope = LogEnvelope::table_from(severity, rows)?;
        self.provider.send(&envelope)
    }

    /// Log at `Trace`.
    pub fn trace(&self, message: impl Into<String>) {
        self.log(Severity::Trace, message, None);
    }

    /// Log at `Debug`.
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message, None);
    }

    /// Log at `Information`.
    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Information, message, None);
    }

    /// Log at `Warning`.
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Severity::Warning, message, None);
    }

    /// Log at `Error`, with the error that caused it if there is one.
    pub fn error(&self, message: impl Into<String>, exception: Option<&(dyn StdError + 'static)>) {
        self.log(Severity::Error, message, exception);
    }

    /// Log at `Critical`, with the error that caused it if there is one.
    pub fn critical(
        &self,
        message: impl Into<String>,
        exception: Option<&(dyn StdError + 'static)>,
    ) {
        self.log(Severity::Critical, message, exception);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use consolebridge_envelope::{EncodeError, LOG_FUNCTION, MAX_PAYLOAD_DEPTH, decode_str};
    use consolebridge_transport::{DropReason, HostContext, HostContextConfig};
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    // Records every raw value the host receives.
    fn recording_context() -> (HostContext, Arc<Mutex<Vec<String>>>) {
        let context = HostContext::new(HostContextConfig::default());
        let received = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&received);
        context.registry().register(LOG_FUNCTION, move |raw| {
            sink.lock().push(raw.unwrap_or_default().to_string());
        });

        (context, received)
    }

    fn decoded(received: &Mutex<Vec<String>>) -> Vec<LogEnvelope> {
        received
            .lock()
            .iter()
            .map(|raw| decode_str(raw).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_default_min_level_is_information() {
        let (context, received) = recording_context();
        context.start().unwrap();

        let logger = ConsoleLoggerProvider::new(context.boundary()).create_logger("app");
        logger.trace("hidden");
        logger.debug("hidden");
        logger.info("shown");
        logger.warn("also shown");

        context.shutdown().await;

        assert_eq!(
            decoded(&received),
            vec![
                LogEnvelope::message(Severity::Information, "shown"),
                LogEnvelope::message(Severity::Warning, "also shown"),
            ]
        );
    }

    #[tokio::test]
    async fn test_filter_sees_category() {
        let (context, received) = recording_context();
        context.start().unwrap();

        let provider = ConsoleLoggerProvider::new(context.boundary())
            .with_filter(|category, severity| category.starts_with("net") || severity >= Severity::Error);
        let net = provider.create_logger("net.http");
        let db = provider.create_logger("db");

        assert!(net.is_enabled(Severity::Trace));
        assert!(!db.is_enabled(Severity::Warning));

        net.trace("request sent");
        db.warn("slow query");
        db.error("connection lost", None);

        context.shutdown().await;

        assert_eq!(
            decoded(&received),
            vec![
                LogEnvelope::message(Severity::Trace, "request sent"),
                LogEnvelope::message(Severity::Error, "connection lost"),
            ]
        );
    }

    #[tokio::test]
    async fn test_exception_is_rendered() {
        let (context, received) = recording_context();
        context.start().unwrap();

        let logger = ConsoleLoggerProvider::new(context.boundary()).create_logger("app");
        let error = std::io::Error::other("disk full");
        logger.critical("could not save", Some(&error));

        context.shutdown().await;

        assert_eq!(
            decoded(&received),
            vec![LogEnvelope::message(Severity::Critical, "could not save").with_exception("disk full")]
        );
    }

    #[tokio::test]
    async fn test_values_and_tables() {
        #[derive(Serialize)]
        struct Row {
            name: &'static str,
            age: u32,
        }

        let (context, received) = recording_context();
        context.start().unwrap();

        let logger = ConsoleLoggerProvider::new(context.boundary())
            .with_min_level(Severity::Debug)
            .create_logger("app");
        logger.log_value(Severity::Debug, &json!({"retry": 3}), None);
        logger.log_table(
            Severity::Information,
            &[Row { name: "ada", age: 36 }, Row { name: "alan", age: 41 }],
        );

        context.shutdown().await;

        assert_eq!(
            decoded(&received),
            vec![
                LogEnvelope::message(Severity::Debug, json!({"retry": 3})),
                LogEnvelope::table(
                    Severity::Information,
                    [json!({"name": "ada", "age": 36}), json!({"name": "alan", "age": 41})]
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_try_log_reports_drops() {
        let context = HostContext::new(HostContextConfig::default());
        let logger = ConsoleLoggerProvider::new(context.boundary()).create_logger("app");

        let result = logger.try_log(Severity::Error, "nobody listening", None);
        assert!(matches!(
            result,
            Err(Error::Dropped(DropReason::NotRegistered))
        ));

        // Filtered records are not an error.
        assert!(logger.try_log(Severity::Trace, "quiet", None).is_ok());
    }

    #[tokio::test]
    async fn test_too_deep_value_fails_at_call_site() {
        let (context, received) = recording_context();
        context.start().unwrap();

        let logger = ConsoleLoggerProvider::new(context.boundary()).create_logger("app");
        let deep = (0..200).fold(json!("core"), |inner, _| json!([inner]));

        let result = logger.try_log_value(Severity::Information, &deep, None);
        assert!(matches!(
            result,
            Err(Error::Encode(EncodeError::TooDeep(MAX_PAYLOAD_DEPTH)))
        ));

        context.shutdown().await;

        assert!(received.lock().is_empty());
    }
}
