use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;
use crate::models::contact::ContactRequest;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Conservative address check: local part, `@`, domain, `.`, TLD of 2+ letters.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn has_email_shape(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Request-schema bounds, checked on the raw payload before sanitization.
pub fn validate_request_shape(req: &ContactRequest) -> Result<(), AppError> {
    let name_len = char_len(&req.name);
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_len) {
        return Err(AppError::Validation(format!(
            "name must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters"
        )));
    }
    if !has_email_shape(&req.email) {
        return Err(AppError::Validation(
            "email is not a valid email address".to_string(),
        ));
    }
    let message_len = char_len(&req.message);
    if !(MESSAGE_MIN_CHARS..=MESSAGE_MAX_CHARS).contains(&message_len) {
        return Err(AppError::Validation(format!(
            "message must be between {MESSAGE_MIN_CHARS} and {MESSAGE_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

/// Post-sanitization checks, fail-fast in order: email, name, message.
/// Sanitizing can shrink a value below the bound it passed upstream.
pub fn validate_sanitized(name: &str, email: &str, message: &str) -> Result<(), AppError> {
    if !is_valid_email(email) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }
    if char_len(name) < NAME_MIN_CHARS {
        return Err(AppError::Validation(format!(
            "Name must be at least {NAME_MIN_CHARS} characters"
        )));
    }
    if char_len(message) < MESSAGE_MIN_CHARS {
        return Err(AppError::Validation(format!(
            "Message must be at least {MESSAGE_MIN_CHARS} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn validation_message(result: Result<(), AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_email_pattern_accepts_common_addresses() {
        assert!(is_valid_email("sarah.j@example.com"));
        assert!(is_valid_email("a+tag@sub.domain.io"));
        assert!(is_valid_email("x_y%z@host-1.co"));
    }

    #[test]
    fn test_email_pattern_rejects_malformed() {
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("user@host"));
        assert!(!is_valid_email("user@host.c"));
        assert!(!is_valid_email("user name@host.com"));
        assert!(!is_valid_email("@host.com"));
    }

    #[test]
    fn test_shape_accepts_boundaries() {
        assert!(validate_request_shape(&request("Jo", "jo@example.com", "0123456789")).is_ok());
        let long_name = "n".repeat(NAME_MAX_CHARS);
        let long_message = "m".repeat(MESSAGE_MAX_CHARS);
        assert!(validate_request_shape(&request(&long_name, "a@b.co", &long_message)).is_ok());
    }

    #[test]
    fn test_shape_rejects_out_of_bounds() {
        let msg = validation_message(validate_request_shape(&request(
            "J",
            "j@example.com",
            "long enough message",
        )));
        assert!(msg.contains("name"));

        let msg = validation_message(validate_request_shape(&request(
            &"n".repeat(NAME_MAX_CHARS + 1),
            "j@example.com",
            "long enough message",
        )));
        assert!(msg.contains("name"));

        let msg = validation_message(validate_request_shape(&request(
            "John",
            "j@example.com",
            "Short",
        )));
        assert!(msg.contains("message"));

        let msg = validation_message(validate_request_shape(&request(
            "John",
            "j@example.com",
            &"m".repeat(MESSAGE_MAX_CHARS + 1),
        )));
        assert!(msg.contains("message"));
    }

    #[test]
    fn test_shape_rejects_bad_email() {
        let msg = validation_message(validate_request_shape(&request(
            "John Doe",
            "invalid-email",
            "long enough message",
        )));
        assert!(msg.contains("email"));
    }

    #[test]
    fn test_shape_counts_characters_not_bytes() {
        // 2 chars, 4 bytes.
        assert!(validate_request_shape(&request("éé", "a@b.co", "0123456789")).is_ok());
    }

    #[test]
    fn test_sanitized_boundaries() {
        assert!(validate_sanitized("Jo", "jo@example.com", "0123456789").is_ok());

        let msg = validation_message(validate_sanitized("J", "jo@example.com", "0123456789"));
        assert!(msg.contains("Name"));

        let msg = validation_message(validate_sanitized("Jo", "jo@example.com", "012345678"));
        assert!(msg.contains("Message"));
    }

    #[test]
    fn test_sanitized_checks_email_first() {
        let msg = validation_message(validate_sanitized("J", "nope", "short"));
        assert!(msg.contains("email"));
    }
}
