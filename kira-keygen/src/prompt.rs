use dialoguer::Password;
use zeroize::Zeroizing;

use crate::error::CliError;

/// Prompt for a mnemonic phrase (hidden input).
pub fn prompt_mnemonic(prompt: &str) -> Result<Zeroizing<String>, CliError> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| CliError::PromptError(e.to_string()))
}

/// Use `given` if present, otherwise ask for it.
pub fn mnemonic_or_prompt(
    given: Option<String>,
    prompt: &str,
) -> Result<Zeroizing<String>, CliError> {
    match given {
        Some(phrase) => Ok(Zeroizing::new(phrase)),
        None => prompt_mnemonic(prompt),
    }
}
