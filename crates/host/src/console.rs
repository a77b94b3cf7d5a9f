use std::sync::Arc;

use consolebridge_envelope::Channel;
use serde_json::Value;

/// The host's native console: one output function per [`Channel`].
///
/// Implementations are treated as append-only sinks. Writes must not panic.
pub trait NativeConsole: Send + Sync + 'static {
    /// Write `value` to `channel`.
    fn write(&self, channel: Channel, value: &Value);
}

impl<T: NativeConsole + ?Sized> NativeConsole for Arc<T> {
    fn write(&self, channel: Channel, value: &Value) {
        (**self).write(channel, value);
    }
}

impl<T: NativeConsole + ?Sized> NativeConsole for Box<T> {
    fn write(&self, channel: Channel, value: &Value) {
        (**self).write(channel, value);
    }
}

/// Text shown for a value: strings as-is, anything else as compact JSON.
#[must_use]
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
