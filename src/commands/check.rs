//! Feedback check command
//!
//! Scores one guess against a given secret without running a round.

use crate::core::{Code, CodeParseError, Feedback};

/// Result of checking a guess against a secret
pub struct CheckResult {
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Parse both codes and evaluate the guess
///
/// # Errors
///
/// Returns an error if either code is malformed, incomplete, or names an
/// unknown color.
pub fn check_codes(secret: &str, guess: &str) -> Result<CheckResult, CodeParseError> {
    let secret: Code = secret.parse()?;
    let guess: Code = guess.parse()?;

    Ok(CheckResult {
        secret,
        guess,
        feedback: Feedback::evaluate(&secret, &guess),
    })
}
