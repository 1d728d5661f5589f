//! Helpers for consistent terminal messages.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Writes a prompt without a trailing newline and flushes it.
pub fn prompt(out: &mut dyn Write, name: &str) -> std::io::Result<()> {
    write!(out, "{}> ", name)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_and_warning_prefixes() {
        let mut err = Vec::new();
        write_error(&mut err, "bad").unwrap();
        display_warning(&mut err, "careful").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "Error: bad\nWARNING: careful\n");
    }

    #[test]
    fn test_prompt_has_no_newline() {
        let mut out = Vec::new();
        prompt(&mut out, "Ann").unwrap();
        assert_eq!(out, b"Ann> ");
    }
}
