//! Native console channel selection.

use std::fmt;

use crate::payload::Kind;
use crate::severity::{LogLevel, Severity};

/// A native console output function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Plain log output.
    Log,
    /// Trace output.
    Trace,
    /// Debug output.
    Debug,
    /// Warning output.
    Warn,
    /// Error output. Also the fallback for diagnostics about broken records.
    Error,
    /// Grid renderer for tabular data.
    Table,
}

impl Channel {
    /// Every channel the host must provide.
    pub const ALL: [Self; 6] = [
        Self::Log,
        Self::Trace,
        Self::Debug,
        Self::Warn,
        Self::Error,
        Self::Table,
    ];

    /// Channel that receives diagnostics when a record can't be decoded.
    pub const FALLBACK: Self = Self::Error;

    /// Native name of the channel.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Picks the console channel for a record.
///
/// Tables always go to the grid renderer, whatever their severity. Messages
/// map by severity; `Error` and `Critical` share the error channel since
/// consoles have no separate critical output. Levels with no known severity
/// go to the plain log channel.
#[must_use]
pub const fn select_channel(kind: Kind, level: LogLevel) -> Channel {
    match (kind, level) {
        (Kind::Table, _) => Channel::Table,
        (Kind::Message, LogLevel::Known(severity)) => match severity {
            Severity::Trace => Channel::Trace,
            Severity::Debug => Channel::Debug,
            Severity::Information => Channel::Log,
            Severity::Warning => Channel::Warn,
            Severity::Error | Severity::Critical => Channel::Error,
        },
        (Kind::Message, LogLevel::Unmapped(_)) => Channel::Log,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_ignores_severity() {
        for severity in Severity::ALL {
            assert_eq!(select_channel(Kind::Table, severity.into()), Channel::Table);
        }
    }

    #[test]
    fn test_message_channels() {
        assert_eq!(select_channel(Kind::Message, Severity::Trace.into()), Channel::Trace);
        assert_eq!(select_channel(Kind::Message, Severity::Debug.into()), Channel::Debug);
        assert_eq!(
            select_channel(Kind::Message, Severity::Information.into()),
            Channel::Log
        );
        assert_eq!(select_channel(Kind::Message, Severity::Warning.into()), Channel::Warn);
        assert_eq!(select_channel(Kind::Message, Severity::Error.into()), Channel::Error);
    }

    #[test]
    fn test_critical_collapses_into_error() {
        assert_eq!(
            select_channel(Kind::Message, Severity::Error.into()),
            select_channel(Kind::Message, Severity::Critical.into())
        );
    }

    #[test]
    fn test_unmapped_levels_go_to_log() {
        assert_eq!(
            select_channel(Kind::Message, LogLevel::Unmapped(6)),
            Channel::Log
        );
        assert_eq!(
            select_channel(Kind::Table, LogLevel::Unmapped(6)),
            Channel::Table
        );
    }

    #[test]
    fn test_messages_never_reach_table() {
        for severity in Severity::ALL {
            assert_ne!(select_channel(Kind::Message, severity.into()), Channel::Table);
        }
    }
}
