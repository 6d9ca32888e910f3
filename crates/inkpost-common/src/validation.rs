// Input validation for API request bodies
//
// Minimum constraints mirror what clients are told to enforce; the byte
// caps are last-resort hard limits, not configurable. Values chosen to
// allow legitimate use while preventing resource exhaustion.

use regex::Regex;
use std::sync::OnceLock;

// =============================================================================
// Input Constraints
// =============================================================================

/// Minimum password length.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Maximum size for name and email fields.
/// 320 bytes is the RFC 5321 upper bound for an address.
pub const MAX_IDENTITY_FIELD_BYTES: usize = 320;

/// Maximum size for a password.
pub const MAX_PASSWORD_BYTES: usize = 1024; // 1 KB

/// Maximum size for a post title.
pub const MAX_TITLE_BYTES: usize = 2 * 1024; // 2 KB

/// Maximum size for post content.
/// 1 MB allows long-form writing with embedded markup.
pub const MAX_CONTENT_BYTES: usize = 1024 * 1024; // 1 MB

/// Generic validation error message returned to clients.
/// Intentionally vague to avoid leaking which field failed.
pub const VALIDATION_ERROR_MESSAGE: &str = "invalid input";

/// Validation error - callers translate this to a 400 response
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationError;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Syntactic check only: one @, no whitespace, a dot in the domain.
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"))
}

/// Validate an email address syntactically
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.len() > MAX_IDENTITY_FIELD_BYTES || !email_regex().is_match(email) {
        return Err(ValidationError);
    }
    Ok(())
}

/// Validate a password (length bounds only; strength is the user's business)
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_CHARS || password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError);
    }
    Ok(())
}

/// Validate a display name
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() || name.len() > MAX_IDENTITY_FIELD_BYTES {
        return Err(ValidationError);
    }
    Ok(())
}

/// Validate a post title
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() || title.len() > MAX_TITLE_BYTES {
        return Err(ValidationError);
    }
    Ok(())
}

/// Validate post content
pub fn validate_content(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() || content.len() > MAX_CONTENT_BYTES {
        return Err(ValidationError);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("alice@x.com").is_ok());
        assert!(validate_email("a.b+tag@sub.example.org").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("alice").is_err());
        assert!(validate_email("alice@").is_err());
        assert!(validate_email("alice@nodot").is_err());
        assert!(validate_email("al ice@x.com").is_err());
        assert!(validate_email("@x.com").is_err());
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("12345").is_err());
        assert!(validate_password("").is_err());
        assert!(validate_password(&"x".repeat(MAX_PASSWORD_BYTES + 1)).is_err());
    }

    #[test]
    fn test_name() {
        assert!(validate_name("Alice").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(MAX_IDENTITY_FIELD_BYTES + 1)).is_err());
    }

    #[test]
    fn test_title_and_content() {
        assert!(validate_title("Hello").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title(&"x".repeat(MAX_TITLE_BYTES + 1)).is_err());

        assert!(validate_content("Body").is_ok());
        assert!(validate_content("").is_err());
        assert!(validate_content(&"x".repeat(MAX_CONTENT_BYTES)).is_ok());
        assert!(validate_content(&"x".repeat(MAX_CONTENT_BYTES + 1)).is_err());
    }
}
