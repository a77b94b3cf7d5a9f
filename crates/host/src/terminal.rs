//! Console backed by the process's stdout and stderr.

use std::io::Write;

use consolebridge_envelope::Channel;
use parking_lot::Mutex;
use serde_json::Value;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::console::{NativeConsole, display_text};
use crate::table::render_table;

/// Writes log, trace, debug and table output to stdout, warnings and errors
/// to stderr, colored by channel.
pub struct TerminalConsole {
    stdout: Mutex<StandardStream>,
    stderr: Mutex<StandardStream>,
}

impl TerminalConsole {
    /// Create a terminal console.
    #[must_use]
    pub fn new(color: ColorChoice) -> Self {
        Self {
            stdout: Mutex::new(StandardStream::stdout(color)),
            stderr: Mutex::new(StandardStream::stderr(color)),
        }
    }

    fn format(channel: Channel, value: &Value) -> String {
        match (channel, value) {
            (Channel::Table, Value::Array(rows)) => render_table(rows),
            (Channel::Trace, value) => format!("Trace: {}", display_text(value)),
            (_, value) => display_text(value),
        }
    }

    const fn color(channel: Channel) -> Option<Color> {
        match channel {
            Channel::Log | Channel::Table => None,
            Channel::Trace => Some(Color::Magenta),
            Channel::Debug => Some(Color::Blue),
            Channel::Warn => Some(Color::Yellow),
            Channel::Error => Some(Color::Red),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}

impl std::fmt::Debug for TerminalConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalConsole").finish_non_exhaustive()
    }
}

impl NativeConsole for TerminalConsole {
    fn write(&self, channel: Channel, value: &Value) {
        let text = Self::format(channel, value);

        let mut stream = match channel {
            Channel::Warn | Channel::Error => self.stderr.lock(),
            _ => self.stdout.lock(),
        };

        if let Some(color) = Self::color(channel) {
            let _ = stream.set_color(ColorSpec::new().set_fg(Some(color)));
        }
        let _ = write!(stream, "{text}");
        let _ = stream.reset();
        let _ = writeln!(stream);
        let _ = stream.flush();
    }
}
