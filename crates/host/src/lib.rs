//! Host side of consolebridge: decodes envelopes arriving from the runtime and
//! writes them to the right native console channel.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod console;
mod dispatcher;
mod table;
mod terminal;

/// In-memory console for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use console::{NativeConsole, display_text};
pub use dispatcher::{
    ConsoleDispatcher, EXCEPTION_LABEL, INVALID_ENVELOPE_LABEL, NULL_MARKER,
    register_console_dispatcher,
};
pub use table::render_table;
pub use terminal::TerminalConsole;

pub use termcolor::ColorChoice;
