use dialoguer::Password;
use std::io;

use crate::{Error, Result};

/// Read a secret from the terminal without echoing it.
///
/// An empty answer is accepted and returned as-is so that credential
/// resolution can report it.
pub fn prompt_secret(prompt: &str) -> Result<String> {
    Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(|err| Error::Prompt(io::Error::new(io::ErrorKind::Other, err)))
}
