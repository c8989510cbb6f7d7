use crate::error::PdfPullError;
use std::io::{BufRead, Write};

pub const RANGE_PROMPT: &str = "Enter start and stop indices to download (inclusive): ";
pub const PREFIX_PROMPT: &str = "Enter a prefix naming convention: ";

/// Prints `message` and reads one line, without its line terminator.
pub fn prompt_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> Result<String, PdfPullError> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PdfPullError::InvalidInput {
            details: "input ended before a value was entered".to_string(),
        });
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
