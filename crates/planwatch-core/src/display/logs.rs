//! Log line formatting.

use std::fmt;

use super::datetime::LocalTime;
use crate::models::{FixLogEntry, LogEntry};

/// Wrapper type formatting a log entry as `[HH:MM:SS] message`.
///
/// Backend-side log preambles (timestamp, level, pid, thread tag) are
/// stripped so the message is not prefixed twice.
pub struct LogLine<'a>(pub &'a LogEntry);

impl<'a> fmt::Display for LogLine<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            LocalTime(&self.0.timestamp),
            strip_backend_preamble(&self.0.message)
        )
    }
}

/// Wrapper type formatting a fix-history entry, same shape as [`LogLine`].
pub struct FixLogLine<'a>(pub &'a FixLogEntry);

impl<'a> fmt::Display for FixLogLine<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            LocalTime(&self.0.timestamp),
            strip_backend_preamble(&self.0.message)
        )
    }
}

/// Strip a backend logging preamble from a message, if present.
///
/// Messages captured from the backend's console can carry a prefix of the
/// form `2025-03-30 21:31:44.713 INFO 29506 --- [ main] `. The display
/// already prefixes its own timestamp, so the duplicate is removed. Messages
/// without the prefix are returned unchanged.
pub fn strip_backend_preamble(message: &str) -> &str {
    parse_preamble(message).unwrap_or(message)
}

/// Try to consume the preamble; returns the remainder on a full match.
fn parse_preamble(message: &str) -> Option<&str> {
    let bytes = message.as_bytes();
    let mut pos = 0;

    // 2025-03-30 21:31:44.713
    fixed_digits(bytes, &mut pos, 4)?;
    expect(bytes, &mut pos, b'-')?;
    fixed_digits(bytes, &mut pos, 2)?;
    expect(bytes, &mut pos, b'-')?;
    fixed_digits(bytes, &mut pos, 2)?;
    expect(bytes, &mut pos, b' ')?;
    fixed_digits(bytes, &mut pos, 2)?;
    expect(bytes, &mut pos, b':')?;
    fixed_digits(bytes, &mut pos, 2)?;
    expect(bytes, &mut pos, b':')?;
    fixed_digits(bytes, &mut pos, 2)?;
    expect(bytes, &mut pos, b'.')?;
    fixed_digits(bytes, &mut pos, 3)?;

    // level word and pid
    some_spaces(bytes, &mut pos)?;
    some_word(bytes, &mut pos)?;
    some_spaces(bytes, &mut pos)?;
    some_digits(bytes, &mut pos)?;
    some_spaces(bytes, &mut pos)?;

    // --- [ thread ]
    expect(bytes, &mut pos, b'-')?;
    expect(bytes, &mut pos, b'-')?;
    expect(bytes, &mut pos, b'-')?;
    some_spaces(bytes, &mut pos)?;
    expect(bytes, &mut pos, b'[')?;
    let close = bytes[pos..].iter().position(|&b| b == b']')?;
    if close == 0 {
        return None;
    }
    pos += close + 1;
    some_spaces(bytes, &mut pos)?;

    // Everything consumed so far is ASCII, so the cut is a char boundary.
    Some(&message[pos..])
}

fn expect(bytes: &[u8], pos: &mut usize, byte: u8) -> Option<()> {
    if bytes.get(*pos) == Some(&byte) {
        *pos += 1;
        Some(())
    } else {
        None
    }
}

fn fixed_digits(bytes: &[u8], pos: &mut usize, count: usize) -> Option<()> {
    let end = pos.checked_add(count)?;
    if end > bytes.len() || !bytes[*pos..end].iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    *pos = end;
    Some(())
}

fn some_digits(bytes: &[u8], pos: &mut usize) -> Option<()> {
    let start = *pos;
    while bytes.get(*pos).is_some_and(|b| b.is_ascii_digit()) {
        *pos += 1;
    }
    (*pos > start).then_some(())
}

fn some_word(bytes: &[u8], pos: &mut usize) -> Option<()> {
    let start = *pos;
    while bytes
        .get(*pos)
        .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_')
    {
        *pos += 1;
    }
    (*pos > start).then_some(())
}

fn some_spaces(bytes: &[u8], pos: &mut usize) -> Option<()> {
    let start = *pos;
    while bytes.get(*pos).is_some_and(|b| *b == b' ' || *b == b'\t') {
        *pos += 1;
    }
    (*pos > start).then_some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_console_preamble() {
        let message = "2025-03-30 21:31:44.713  INFO 29506 --- [           main] Starting PlanExecutor";
        assert_eq!(strip_backend_preamble(message), "Starting PlanExecutor");
    }

    #[test]
    fn test_plain_message_is_untouched() {
        assert_eq!(
            strip_backend_preamble("Executing command: make"),
            "Executing command: make"
        );
    }

    #[test]
    fn test_partial_preamble_is_untouched() {
        // Date without the thread tag must not be treated as a preamble
        let message = "2025-03-30 21:31:44.713 something happened";
        assert_eq!(strip_backend_preamble(message), message);
    }

    #[test]
    fn test_empty_thread_tag_is_untouched() {
        let message = "2025-03-30 21:31:44.713 INFO 1 --- [] oops";
        assert_eq!(strip_backend_preamble(message), message);
    }
}
