//! [`CaptureConsole`] for asserting on dispatcher output.
//!
//! Compiled for this crate's own tests and for dependents that enable the
//! `test-support` feature.

use std::sync::Arc;

use consolebridge_envelope::Channel;
use parking_lot::Mutex;
use serde_json::Value;

use crate::console::{NativeConsole, display_text};

/// One captured console write.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleWrite {
    /// Channel written to.
    pub channel: Channel,
    /// Value written.
    pub value: Value,
}

/// A console that records every write.
///
/// Clones share the same record, so a clone can be handed to a dispatcher
/// while the test keeps the original.
#[derive(Debug, Clone, Default)]
pub struct CaptureConsole {
    writes: Arc<Mutex<Vec<ConsoleWrite>>>,
}

impl CaptureConsole {
    /// Create an empty capture console.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<ConsoleWrite> {
        self.writes.lock().clone()
    }

    /// All writes as `(channel, text)` pairs.
    #[must_use]
    pub fn lines(&self) -> Vec<(Channel, String)> {
        self.writes
            .lock()
            .iter()
            .map(|write| (write.channel, display_text(&write.value)))
            .collect()
    }

    /// Number of writes so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.writes.lock().len()
    }

    /// Whether nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writes.lock().is_empty()
    }

    /// Forget captured writes.
    pub fn clear(&self) {
        self.writes.lock().clear();
    }
}

impl NativeConsole for CaptureConsole {
    fn write(&self, channel: Channel, value: &Value) {
        self.writes.lock().push(ConsoleWrite {
            channel,
            value: value.clone(),
        });
    }
}
