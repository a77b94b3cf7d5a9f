//! `tracing` layer that sends events to the host console.

use std::error::Error as StdError;
use std::fmt::{self, Write};

use consolebridge_envelope::{LogEnvelope, Severity};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber, debug};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

use crate::exception::render_exception;
use crate::provider::ConsoleLoggerProvider;

/// Name of the event field that is sent as the envelope's exception.
pub const EXCEPTION_FIELD: &str = "exception";

/// Target prefix of this workspace's own crates. Their events are never
/// forwarded.
const OWN_TARGET_PREFIX: &str = "consolebridge_";

/// A tracing layer that forwards events to the host console.
///
/// The event's target is used as the category for filtering. Span names are
/// prefixed to the message the same way as for other tracing bridges in this
/// workspace.
#[derive(Clone, Debug)]
pub struct ConsoleLayer {
    provider: ConsoleLoggerProvider,
}

impl ConsoleLayer {
    /// Create a layer sending through `provider`.
    #[must_use]
    pub const fn new(provider: ConsoleLoggerProvider) -> Self {
        Self { provider }
    }
}

const fn severity_for(level: Level) -> Severity {
    match level {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Warning,
        Level::INFO => Severity::Information,
        Level::DEBUG => Severity::Debug,
        Level::TRACE => Severity::Trace,
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        if target.starts_with(OWN_TARGET_PREFIX) {
            return;
        }

        let severity = severity_for(*metadata.level());
        if !self.provider.is_enabled(target, severity) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let spans = ctx
            .event_scope(event)
            .map(|scope| {
                scope
                    .from_root()
                    .map(|span| span.name())
                    .collect::<Vec<_>>()
                    .join("::")
            })
            .unwrap_or_default();

        let mut message = visitor.take_message();
        if !spans.is_empty() {
            message = format!("{spans}: {message}");
        }

        let mut envelope = LogEnvelope::message(severity, message);
        if let Some(exception) = visitor.exception {
            envelope = envelope.with_exception(exception);
        }

        if let Err(e) = self.provider.send(&envelope) {
            debug!(category = target, "failed to forward tracing event: {e}");
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: String,
    exception: Option<String>,
}

impl EventVisitor {
    fn take_message(&mut self) -> String {
        let mut message = std::mem::take(&mut self.message);
        if !self.fields.is_empty() {
            if !message.is_empty() {
                message.push(' ');
            }
            message.push_str(&self.fields);
        }
        message
    }

    fn push_field(&mut self, field: &Field, value: impl fmt::Display) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={value}", field.name());
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            EXCEPTION_FIELD => self.exception = Some(value.to_string()),
            _ => self.push_field(field, value),
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn StdError + 'static)) {
        if field.name() == EXCEPTION_FIELD {
            self.exception = Some(render_exception(value));
        } else {
            self.push_field(field, value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            EXCEPTION_FIELD => self.exception = Some(format!("{value:?}")),
            _ => self.push_field(field, format_args!("{value:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_map_to_severities() {
        assert_eq!(severity_for(Level::ERROR), Severity::Error);
        assert_eq!(severity_for(Level::WARN), Severity::Warning);
        assert_eq!(severity_for(Level::INFO), Severity::Information);
        assert_eq!(severity_for(Level::DEBUG), Severity::Debug);
        assert_eq!(severity_for(Level::TRACE), Severity::Trace);
    }
}
