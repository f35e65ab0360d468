//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

use crate::error::{DomainError, DomainResult};

// =============================================================================
// Validation
// =============================================================================

/// Message reported when a user name is missing or blank
pub const NAME_REQUIRED_MESSAGE: &str = "Name cannot be null or empty";

/// Message reported when an email address is missing or blank
pub const EMAIL_REQUIRED_MESSAGE: &str = "Email cannot be null or empty";

/// Check that a text value is non-blank once surrounding padding is trimmed.
///
/// Padding is any char at or below U+0020 (space and ASCII control
/// characters). Other Unicode whitespace such as U+00A0 counts as content.
/// The value itself is left untouched; callers keep the original form.
pub fn require_text(value: &str, message: &'static str) -> DomainResult<()> {
    if value.trim_matches(is_padding).is_empty() {
        return Err(DomainError::invalid_argument(message));
    }
    Ok(())
}

fn is_padding(c: char) -> bool {
    c <= ' '
}
