//! DateTime display utilities.

use std::fmt;

use jiff::civil::DateTime;

/// A wrapper around a civil `DateTime` that displays its time-of-day
/// component.
///
/// Log entries are prefixed with the time only; the date adds no value while
/// tailing a live execution. The backend emits zone-less timestamps, so the
/// value is shown exactly as recorded.
///
/// # Format
///
/// `HH:MM:SS`, 24-hour, zero-padded.
pub struct LocalTime<'a>(pub &'a DateTime);

impl<'a> fmt::Display for LocalTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%H:%M:%S"))
    }
}
