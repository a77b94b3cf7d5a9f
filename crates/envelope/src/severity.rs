//! Log severity.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log record.
///
/// Variants are ordered from least to most severe, so threshold checks can
/// compare with `>=`. The discriminants are the wire ordinals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Very detailed diagnostics.
    Trace = 0,
    /// Diagnostics useful while developing.
    Debug = 1,
    /// General application flow.
    #[default]
    Information = 2,
    /// Something unexpected that the application recovered from.
    Warning = 3,
    /// A failure of the current operation.
    Error = 4,
    /// A failure that needs immediate attention.
    Critical = 5,
}

impl Severity {
    /// All severities, least severe first.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Information,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Wire ordinal of this severity.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Looks up a severity by wire ordinal.
    #[must_use]
    pub const fn from_ordinal(ordinal: u64) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Trace),
            1 => Some(Self::Debug),
            2 => Some(Self::Information),
            3 => Some(Self::Warning),
            4 => Some(Self::Error),
            5 => Some(Self::Critical),
            _ => None,
        }
    }

    /// Lower-case name of this severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity as carried on the wire.
///
/// Newer runtimes may send ordinals this crate doesn't know yet. Those are
/// kept as [`LogLevel::Unmapped`] so the record is still shown and re-encodes
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// One of the known severities.
    Known(Severity),
    /// An ordinal with no known severity.
    Unmapped(u64),
}

impl LogLevel {
    /// Wire ordinal of this level.
    #[must_use]
    pub const fn ordinal(self) -> u64 {
        match self {
            Self::Known(severity) => severity.ordinal() as u64,
            Self::Unmapped(ordinal) => ordinal,
        }
    }

    /// Level for a wire ordinal. Never fails.
    #[must_use]
    pub const fn from_ordinal(ordinal: u64) -> Self {
        match Severity::from_ordinal(ordinal) {
            Some(severity) => Self::Known(severity),
            None => Self::Unmapped(ordinal),
        }
    }

    /// The known severity, if there is one.
    #[must_use]
    pub const fn severity(self) -> Option<Severity> {
        match self {
            Self::Known(severity) => Some(severity),
            Self::Unmapped(_) => None,
        }
    }
}

impl From<Severity> for LogLevel {
    fn from(severity: Severity) -> Self {
        Self::Known(severity)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(severity) => severity.fmt(f),
            Self::Unmapped(ordinal) => write!(f, "level {ordinal}"),
        }
    }
}

/// Returned when a string names no known severity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid severity: {0:?}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "information" | "info" => Ok(Self::Information),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "critical" | "fatal" => Ok(Self::Critical),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_severity() {
        assert!(Severity::Trace < Severity::Debug);
        assert!(Severity::Debug < Severity::Information);
        assert!(Severity::Information < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
    }

    #[test]
    fn test_ordinals_are_stable() {
        for (expected, severity) in Severity::ALL.iter().enumerate() {
            assert_eq!(usize::from(severity.ordinal()), expected);
            assert_eq!(Severity::from_ordinal(expected as u64), Some(*severity));
        }

        assert_eq!(Severity::from_ordinal(6), None);
    }

    #[test]
    fn test_log_level_keeps_unknown_ordinals() {
        assert_eq!(LogLevel::from_ordinal(3), LogLevel::Known(Severity::Warning));
        assert_eq!(LogLevel::from_ordinal(6), LogLevel::Unmapped(6));
        assert_eq!(LogLevel::from_ordinal(u64::MAX).ordinal(), u64::MAX);
        assert_eq!(LogLevel::Unmapped(9).severity(), None);
        assert_eq!(LogLevel::from(Severity::Debug).ordinal(), 1);
    }

    #[test]
    fn test_parse() {
        assert_eq!("trace".parse(), Ok(Severity::Trace));
        assert_eq!("Info".parse(), Ok(Severity::Information));
        assert_eq!("WARNING".parse(), Ok(Severity::Warning));
        assert_eq!("fatal".parse(), Ok(Severity::Critical));
        assert_eq!(
            "loud".parse::<Severity>(),
            Err(ParseSeverityError("loud".to_string()))
        );
    }
}
