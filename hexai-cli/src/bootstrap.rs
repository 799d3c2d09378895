//! Console prompts for board size and search depth
//!
//! Bad input is reported and asked for again; it never ends the program.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};

/// Parse a whole number in `min..=max`
pub fn parse_bounded(input: &str, min: usize, max: usize) -> Result<usize> {
    let text = input.trim();
    let value: i64 = match text.parse() {
        Ok(v) => v,
        Err(_) => bail!("'{}' is not a whole number", text),
    };
    if value < min as i64 || value > max as i64 {
        bail!("{} is out of range (expected {}..={})", value, min, max);
    }
    Ok(value as usize)
}

/// Ask until a valid number arrives; `None` when input ends first
///
/// An empty answer takes `default` when one is given.
pub fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    min: usize,
    max: usize,
    default: Option<usize>,
) -> Result<Option<usize>> {
    loop {
        match default {
            Some(value) => write!(output, "{} [{}]: ", prompt, value)?,
            None => write!(output, "{}: ", prompt)?,
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.trim().is_empty() {
            if let Some(value) = default {
                return Ok(Some(value));
            }
        }

        match parse_bounded(&line, min, max) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => writeln!(output, "Invalid input: {}. Please try again.", e)?,
        }
    }
}
