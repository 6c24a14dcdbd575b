//! Short code generation.
//!
//! Codes are drawn from operating system randomness and encoded with the
//! URL-safe base64 alphabet (`A-Z a-z 0-9 - _`), so every character is safe in
//! a path segment without escaping.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 7;

/// Random bytes drawn per code. Six bytes encode to eight characters, which
/// are then cut down to [`CODE_LENGTH`].
const CODE_LENGTH_BYTES: usize = 6;

/// Generates a random short code of [`CODE_LENGTH`] characters.
///
/// Generation does not guarantee uniqueness. Callers check the store and rely
/// on the insert-time uniqueness constraint.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        tracing::error!(error = %e, "System RNG failure");
        AppError::internal("Failed to generate short code", json!({}))
    })?;

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer);
    code.truncate(CODE_LENGTH);

    Ok(code)
}

/// Returns true if `code` has the shape of a generated code.
pub fn is_generated_shape(code: &str) -> bool {
    code.len() == CODE_LENGTH
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code().unwrap();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_url_safe_characters() {
        for _ in 0..200 {
            let code = generate_code().unwrap();
            assert!(is_generated_shape(&code), "unexpected code {code}");
        }
    }

    #[test]
    fn test_generate_code_no_padding() {
        let code = generate_code().unwrap();
        assert!(!code.contains('='));
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code().unwrap()).collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_is_generated_shape() {
        assert!(is_generated_shape("aB3-_x9"));
        assert!(!is_generated_shape("short"));
        assert!(!is_generated_shape("has/sla"));
        assert!(!is_generated_shape("eightchr"));
    }
}
