//! User input utilities for interactive command-line prompts.

use std::io::{self, BufRead, Write};

use crate::error::CliError;

/// Interpret a yes/no answer. Anything but `y`/`yes` (any case) is "no".
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Prompts the user for a yes/no confirmation.
///
/// Empty input is treated as 'no'.
pub fn prompt_confirmation(prompt: &str) -> Result<bool, CliError> {
    confirm_with(&mut io::stdin().lock(), &mut io::stdout(), prompt)
}

/// Ask `prompt` on `output` and read one answer line from `input`.
pub fn confirm_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<bool, CliError> {
    write!(output, "{prompt} [y/N]: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(is_affirmative(&answer))
}
