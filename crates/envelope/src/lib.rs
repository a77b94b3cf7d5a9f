//! Wire envelope for log records crossing from a managed runtime into a host
//! console, and the rules that pick a native console channel for each record.
//!
//! The envelope is a field-tagged JSON object:
//!
//! ```json
//! {"Type":0,"LogLevel":4,"Payload":"disk full","Exception":"IOException: ..."}
//! ```
//!
//! Encoding happens on the runtime side, decoding on the host side. Decoding
//! never panics: broken input yields a [`DecodeFailure`] so a damaged log pipe
//! can't take the caller down with it.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod channel;
mod codec;
mod envelope;
mod error;
mod payload;
mod severity;

pub use channel::{Channel, select_channel};
pub use codec::{
    EXCEPTION_KEY, LOG_LEVEL_KEY, MAX_PAYLOAD_DEPTH, PAYLOAD_KEY, TYPE_KEY, decode, decode_str,
    encode,
};
pub use envelope::LogEnvelope;
pub use error::{DecodeFailure, EncodeError, Result};
pub use payload::{Kind, Payload};
pub use severity::{LogLevel, ParseSeverityError, Severity};

/// Name under which the host registers its console dispatcher, and which the
/// runtime side invokes. Both sides must agree on it byte for byte.
pub const LOG_FUNCTION: &str = "consolebridge.ConsoleLogger.Log";
