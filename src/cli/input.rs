//! Secret value input.
//!
//! Values come from `--secret-value`, a hidden prompt on a terminal, or
//! stdin, in that order.

use std::io::Read;

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{ConfigError, Result};

/// Resolve the secret value.
///
/// # Errors
///
/// Returns `ConfigError::Input` if the prompt or stdin cannot be read.
pub fn secret_value(arg: Option<String>) -> Result<Zeroizing<String>> {
    if let Some(value) = arg {
        return Ok(Zeroizing::new(value));
    }

    if atty::is(atty::Stream::Stdin) {
        debug!("prompting for secret value");
        let value = dialoguer::Password::new()
            .with_prompt("Secret value")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| ConfigError::Input(e.to_string()))?;
        return Ok(Zeroizing::new(value));
    }

    debug!("reading secret value from stdin");
    let mut value = Zeroizing::new(String::new());
    std::io::stdin()
        .read_to_string(&mut value)
        .map_err(|e| ConfigError::Input(e.to_string()))?;
    strip_trailing_newline(&mut value);
    Ok(value)
}

/// Drop one trailing `\n` or `\r\n`, as left by `echo` or a heredoc.
fn strip_trailing_newline(value: &mut String) {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
}
