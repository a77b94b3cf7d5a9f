//! Runtime-side logging that ends up in the host's native console.
//!
//! A [`ConsoleLoggerProvider`] wraps a transport [`Boundary`] and a filter.
//! Category loggers created from it encode each enabled record as an envelope
//! and hand it to the host without waiting. [`ConsoleLayer`] does the same for
//! `tracing` events.
//!
//! Logging never fails the caller: encoding problems and dropped calls are
//! reported through `tracing` and otherwise ignored. The `try_*` methods
//! surface them for callers that care.
//!
//! [`Boundary`]: consolebridge_transport::Boundary
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod exception;
mod layer;
mod logger;
mod provider;

pub use error::{Error, Result};
pub use exception::render_exception;
pub use layer::{ConsoleLayer, EXCEPTION_FIELD};
pub use logger::ConsoleLogger;
pub use provider::{ConsoleLoggerProvider, Filter};

pub use consolebridge_envelope::Severity;
