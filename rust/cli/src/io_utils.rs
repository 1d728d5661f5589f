//! Line-oriented input for interactive commands.

use std::io::BufRead;

/// Reads one line and trims it.
///
/// Returns `Ok(None)` at end of input. Read errors, including an interrupted
/// read, are passed to the caller.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use holdem_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  bet 10 \n");
/// assert_eq!(read_stdin_line(&mut input).unwrap(), Some("bet 10".to_string()));
/// assert_eq!(read_stdin_line(&mut input).unwrap(), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    match stdin.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line.trim().to_string())),
    }
}
