//! Line input for the interactive reveal prompt.

use std::io::BufRead;

/// Next trimmed line from `stdin`, or `None` once input is closed.
///
/// Read errors are treated like end of input: the caller abandons the round.
///
/// ```rust
/// # use teenpatti_cli::io_utils::read_stdin_line;
/// let mut input = std::io::Cursor::new("all\n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("all"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}
