//! JSON wire format for [`LogEnvelope`].
//!
//! Fields are tagged by key rather than position so each one can be checked
//! on its own, and so that keys added later are simply ignored by older
//! decoders.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::envelope::LogEnvelope;
use crate::error::{DecodeFailure, EncodeError, Result};
use crate::payload::{Kind, Payload};
use crate::severity::LogLevel;

/// Key of the record kind ordinal.
pub const TYPE_KEY: &str = "Type";

/// Key of the severity ordinal.
pub const LOG_LEVEL_KEY: &str = "LogLevel";

/// Key of the payload.
pub const PAYLOAD_KEY: &str = "Payload";

/// Key of the optional exception detail.
pub const EXCEPTION_KEY: &str = "Exception";

/// Deepest array/object nesting a payload may have.
///
/// Keeps every encoded envelope under the JSON parser's nesting limit, so
/// whatever `encode` accepts `decode` accepts too. A table's row array
/// counts as one level.
pub const MAX_PAYLOAD_DEPTH: usize = 100;

#[derive(Serialize)]
struct WireEnvelope<'a> {
    #[serde(rename = "Type")]
    kind: u8,
    #[serde(rename = "LogLevel")]
    log_level: u64,
    #[serde(rename = "Payload")]
    payload: WirePayload<'a>,
    #[serde(rename = "Exception", skip_serializing_if = "Option::is_none")]
    exception: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum WirePayload<'a> {
    Scalar(&'a Value),
    Tabular(&'a [Value]),
}

/// Encodes an envelope into its JSON wire form.
///
/// An absent exception is left out of the object entirely.
///
/// # Errors
///
/// Returns [`EncodeError::TooDeep`] if the payload nests deeper than
/// [`MAX_PAYLOAD_DEPTH`], or an error if serialization fails.
pub fn encode(envelope: &LogEnvelope) -> Result<String> {
    let payload = match &envelope.payload {
        Payload::Scalar(value) => {
            if nests_deeper_than(value, MAX_PAYLOAD_DEPTH) {
                return Err(EncodeError::TooDeep(MAX_PAYLOAD_DEPTH));
            }
            WirePayload::Scalar(value)
        }
        Payload::Tabular(rows) => {
            if rows
                .iter()
                .any(|row| nests_deeper_than(row, MAX_PAYLOAD_DEPTH - 1))
            {
                return Err(EncodeError::TooDeep(MAX_PAYLOAD_DEPTH));
            }
            WirePayload::Tabular(rows)
        }
    };

    let wire = WireEnvelope {
        kind: envelope.kind().ordinal(),
        log_level: envelope.level.ordinal(),
        payload,
        exception: envelope.exception.as_deref(),
    };

    Ok(serde_json::to_string(&wire)?)
}

/// Decodes a raw value received from the runtime.
///
/// `None`, blank text and a bare JSON `null` are [`DecodeFailure::Empty`].
/// Anything else that isn't a well-formed envelope is
/// [`DecodeFailure::Malformed`]. This function never panics.
///
/// Ordinals from newer senders are accepted: a `Type` other than the table
/// ordinal is a message, and an unknown `LogLevel` is kept as
/// [`LogLevel::Unmapped`].
///
/// # Errors
///
/// Returns a [`DecodeFailure`] describing why the value was rejected.
pub fn decode(raw: Option<&str>) -> std::result::Result<LogEnvelope, DecodeFailure> {
    let text = raw
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or(DecodeFailure::Empty)?;

    let mut fields = match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(fields)) => fields,
        Ok(Value::Null) => return Err(DecodeFailure::Empty),
        Ok(other) => {
            return Err(DecodeFailure::malformed(format!(
                "expected an object, found {}",
                json_type(&other)
            )));
        }
        Err(e) => return Err(DecodeFailure::malformed(e.to_string())),
    };

    let kind = Kind::from_ordinal(ordinal_field(&fields, TYPE_KEY)?).unwrap_or(Kind::Message);
    let level = LogLevel::from_ordinal(ordinal_field(&fields, LOG_LEVEL_KEY)?);

    let payload = fields
        .remove(PAYLOAD_KEY)
        .ok_or_else(|| DecodeFailure::malformed(format!("missing `{PAYLOAD_KEY}`")))?;

    let payload = match (kind, payload) {
        (Kind::Message, value) => Payload::Scalar(value),
        (Kind::Table, Value::Array(rows)) => Payload::Tabular(rows),
        (Kind::Table, other) => {
            return Err(DecodeFailure::malformed(format!(
                "table `{PAYLOAD_KEY}` must be an array, found {}",
                json_type(&other)
            )));
        }
    };

    let exception = match fields.remove(EXCEPTION_KEY) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    };

    Ok(LogEnvelope {
        level,
        payload,
        exception,
    })
}

/// Decodes text that is known to be present.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_str(raw: &str) -> std::result::Result<LogEnvelope, DecodeFailure> {
    decode(Some(raw))
}

fn ordinal_field(fields: &Map<String, Value>, key: &str) -> std::result::Result<u64, DecodeFailure> {
    match fields.get(key) {
        None | Some(Value::Null) => Err(DecodeFailure::malformed(format!("missing `{key}`"))),
        Some(value) => value.as_u64().ok_or_else(|| {
            DecodeFailure::malformed(format!("`{key}` must be a non-negative integer"))
        }),
    }
}

/// Whether arrays or objects in `value` nest more than `budget` levels deep.
fn nests_deeper_than(value: &Value, budget: usize) -> bool {
    match value {
        Value::Array(items) => {
            budget == 0 || items.iter().any(|item| nests_deeper_than(item, budget - 1))
        }
        Value::Object(fields) => {
            budget == 0
                || fields
                    .values()
                    .any(|field| nests_deeper_than(field, budget - 1))
        }
        _ => false,
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
