//! Interactive yes/no confirmation.

use std::io::{self, BufRead};

/// Whether a response line confirms: `y` or `yes`, any case, surrounding
/// whitespace ignored.
pub fn is_affirmative(response: &str) -> bool {
    matches!(response.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Read one line from `input` and report whether it confirms.
///
/// Returns `UnexpectedEof` if input is closed before a full line (ending in
/// a newline) is read, even when a partial response was typed.
pub fn read_confirmation<R: BufRead + ?Sized>(input: &mut R) -> io::Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    if !line.ends_with('\n') {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a response was entered",
        ));
    }
    Ok(is_affirmative(&line))
}
