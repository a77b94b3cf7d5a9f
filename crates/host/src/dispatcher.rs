//! Turns raw envelopes into console writes.

use consolebridge_envelope::{Channel, LOG_FUNCTION, LogEnvelope, decode};
use consolebridge_transport::HostFunctionRegistry;
use serde_json::Value;
use tracing::debug;

use crate::console::NativeConsole;

/// Prefix of the second line written for a record with exception detail.
pub const EXCEPTION_LABEL: &str = "Exception: ";

/// Prefix of the diagnostic written for a record that can't be decoded.
pub const INVALID_ENVELOPE_LABEL: &str = "Invalid log envelope received: ";

/// Shown in place of the raw text when none was received.
pub const NULL_MARKER: &str = "<null>";

/// Decodes envelopes and writes them to a [`NativeConsole`].
///
/// Holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct ConsoleDispatcher<C> {
    console: C,
}

impl<C: NativeConsole> ConsoleDispatcher<C> {
    /// Create a dispatcher writing to `console`.
    pub const fn new(console: C) -> Self {
        Self { console }
    }

    /// The console this dispatcher writes to.
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Decode `raw` and write it to the channel its kind and severity select.
    ///
    /// A record with non-empty exception detail gets a second write to the same
    /// channel, labelled with [`EXCEPTION_LABEL`]. If `raw` can't be decoded,
    /// a single diagnostic naming the raw text goes to the fallback channel
    /// instead. Never panics.
    pub fn dispatch(&self, raw: Option<&str>) {
        let envelope = match decode(raw) {
            Ok(envelope) => envelope,
            Err(failure) => {
                debug!(%failure, "received undecodable log envelope");

                let shown = raw
                    .filter(|text| !text.trim().is_empty())
                    .unwrap_or(NULL_MARKER);
                self.console.write(
                    Channel::FALLBACK,
                    &Value::String(format!("{INVALID_ENVELOPE_LABEL}{shown}")),
                );
                return;
            }
        };

        let channel = envelope.channel();
        let LogEnvelope {
            payload, exception, ..
        } = envelope;

        self.console.write(channel, &payload.into_value());

        if let Some(exception) = exception.filter(|exception| !exception.is_empty()) {
            self.console.write(
                channel,
                &Value::String(format!("{EXCEPTION_LABEL}{exception}")),
            );
        }
    }
}

/// Register `dispatcher` as the host function runtimes log through.
///
/// Returns `true` if it replaced an earlier registration.
pub fn register_console_dispatcher<C: NativeConsole>(
    registry: &HostFunctionRegistry,
    dispatcher: ConsoleDispatcher<C>,
) -> bool {
    registry.register(LOG_FUNCTION, move |raw| dispatcher.dispatch(raw))
}
