use std::error::Error;
use std::fmt::Write;

/// Renders an error and its chain of sources as exception text.
///
/// ```
/// use consolebridge_logger::render_exception;
///
/// let error = std::io::Error::other("disk full");
/// assert_eq!(render_exception(&error), "disk full");
/// ```
#[must_use]
pub fn render_exception(error: &(dyn Error + 'static)) -> String {
    let mut text = error.to_string();

    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(text, "\nCaused by: {cause}");
        source = cause.source();
    }

    text
}
