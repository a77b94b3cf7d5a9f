//! Record kind and payload.

use serde_json::Value;

/// Whether a record carries a single value or rows for a grid renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A single renderable value.
    Message = 0,
    /// A sequence of records rendered as a table.
    Table = 1,
}

impl Kind {
    /// Wire ordinal of this kind.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Looks up a kind by wire ordinal.
    #[must_use]
    pub const fn from_ordinal(ordinal: u64) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Message),
            1 => Some(Self::Table),
            _ => None,
        }
    }
}

/// The loggable value of a record.
///
/// The variant decides the record's [`Kind`], so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Any JSON value: text, a number, a composite object, or `null`.
    Scalar(Value),
    /// Rows of a table. Usually objects sharing the same keys.
    Tabular(Vec<Value>),
}

impl Payload {
    /// Kind implied by this payload.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Scalar(_) => Kind::Message,
            Self::Tabular(_) => Kind::Table,
        }
    }

    /// The payload as the JSON value handed to a console channel.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Scalar(value) => value,
            Self::Tabular(rows) => Value::Array(rows),
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::Scalar(Value::String(text.to_string()))
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self::Scalar(Value::String(text))
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Scalar(value)
    }
}
