//! Logger provider

use std::fmt;
use std::sync::Arc;

use consolebridge_envelope::{LOG_FUNCTION, LogEnvelope, Severity};
use consolebridge_transport::{Boundary, Outcome};

use crate::error::{Error, Result};
use crate::logger::ConsoleLogger;

/// Decides whether a record of a category and severity is sent.
pub type Filter = Arc<dyn Fn(&str, Severity) -> bool + Send + Sync>;

/// Creates category loggers that send to the host console.
///
/// Records at `Information` and above are sent unless another minimum level
/// or filter is set.
#[derive(Clone)]
pub struct ConsoleLoggerProvider {
    boundary: Boundary,
    filter: Filter,
}

impl ConsoleLoggerProvider {
    /// Create a provider sending through `boundary`.
    #[must_use]
    pub fn new(boundary: Boundary) -> Self {
        Self {
            boundary,
            filter: Arc::new(|_, severity| severity >= Severity::Information),
        }
    }

    /// Send records at `min_level` and above, for every category.
    #[must_use]
    pub fn with_min_level(self, min_level: Severity) -> Self {
        self.with_filter(move |_, severity| severity >= min_level)
    }

    /// Send records for which `filter(category, severity)` holds.
    #[must_use]
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str, Severity) -> bool + Send + Sync + 'static,
    {
        self.filter = Arc::new(filter);
        self
    }

    /// Create a logger for `category`.
    #[must_use]
    pub fn create_logger(&self, category: impl Into<String>) -> ConsoleLogger {
        ConsoleLogger::new(category.into(), self.clone())
    }

    /// Whether records of `category` at `severity` are sent.
    #[must_use]
    pub fn is_enabled(&self, category: &str, severity: Severity) -> bool {
        (self.filter)(category, severity)
    }

    /// Encode and hand `envelope` to the host.
    pub(crate) fn send(&self, envelope: &LogEnvelope) -> Result<()> {
        let raw = envelope.encode()?;

        match self.boundary.try_invoke(LOG_FUNCTION, Some(raw)) {
            Outcome::Enqueued => Ok(()),
            Outcome::Dropped(reason) => Err(Error::Dropped(reason)),
        }
    }
}

impl fmt::Debug for ConsoleLoggerProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLoggerProvider")
            .field("boundary", &self.boundary)
            .finish_non_exhaustive()
    }
}
