//! Validation and sanitization of contact form input.
//!
//! Every field that ends up in the outgoing email is trimmed, length checked
//! and HTML-escaped so that mail clients rendering HTML cannot be abused.

use thiserror::Error;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_SUBJECT_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 5000;
const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    #[error("invalid email address: {reason}")]
    InvalidEmail { reason: &'static str },
}

/// Escapes the characters that carry meaning in HTML.
#[must_use]
pub fn sanitize_html(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            '/' => result.push_str("&#x2F;"),
            '`' => result.push_str("&#x60;"),
            _ => result.push(c),
        }
    }
    result
}

/// Trims `input`, checks it against `max` characters, and escapes it.
///
/// Empty input is rejected only when `required` is set.
pub fn sanitize_field(
    field: &'static str,
    input: &str,
    max: usize,
    required: bool,
) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if required && trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    let actual = trimmed.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(sanitize_html(trimmed))
}

/// Validates an email address and returns it trimmed and lowercased.
pub fn validate_email(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field: "Email" });
    }
    if trimmed.len() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: "Email",
            max: MAX_EMAIL_LEN,
            actual: trimmed.len(),
        });
    }

    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(ValidationError::InvalidEmail { reason: "missing '@'" });
    };
    if domain.contains('@') {
        return Err(ValidationError::InvalidEmail { reason: "more than one '@'" });
    }
    if local.is_empty() || local.len() > MAX_LOCAL_PART_LEN {
        return Err(ValidationError::InvalidEmail {
            reason: "local part must be 1-64 characters",
        });
    }
    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(ValidationError::InvalidEmail {
            reason: "domain must look like example.com",
        });
    }
    if domain.rsplit('.').next().is_some_and(|tld| tld.len() < 2) {
        return Err(ValidationError::InvalidEmail {
            reason: "top-level domain must be at least 2 characters",
        });
    }

    let valid_local = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    let valid_domain = domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || ".-".contains(c));
    if !valid_local || !valid_domain {
        return Err(ValidationError::InvalidEmail {
            reason: "unsupported characters",
        });
    }

    Ok(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            sanitize_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;&#x2F;script&gt;"
        );
        assert_eq!(sanitize_html("Tom & Jerry"), "Tom &amp; Jerry");
    }

    #[test]
    fn accepts_common_addresses() {
        assert_eq!(validate_email("  User@Example.com ").unwrap(), "user@example.com");
        assert!(validate_email("first.last+tag@sub.example.co").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert_matches!(validate_email(""), Err(ValidationError::Empty { .. }));
        assert_matches!(validate_email("plainaddress"), Err(ValidationError::InvalidEmail { .. }));
        assert_matches!(validate_email("a@b@c.com"), Err(ValidationError::InvalidEmail { .. }));
        assert_matches!(validate_email("@example.com"), Err(ValidationError::InvalidEmail { .. }));
        assert_matches!(validate_email("user@localhost"), Err(ValidationError::InvalidEmail { .. }));
        assert_matches!(validate_email("user@example.c"), Err(ValidationError::InvalidEmail { .. }));
        assert_matches!(validate_email("user@exa..mple.com"), Err(ValidationError::InvalidEmail { .. }));
        assert_matches!(validate_email("us er@example.com"), Err(ValidationError::InvalidEmail { .. }));
        let long_local = format!("{}@example.com", "a".repeat(65));
        assert_matches!(validate_email(&long_local), Err(ValidationError::InvalidEmail { .. }));
    }

    #[test]
    fn field_length_counts_characters() {
        let name = "é".repeat(MAX_NAME_LEN);
        assert!(sanitize_field("Name", &name, MAX_NAME_LEN, true).is_ok());
        assert_matches!(
            sanitize_field("Name", &format!("{name}e"), MAX_NAME_LEN, true),
            Err(ValidationError::TooLong { max: MAX_NAME_LEN, actual: 101, .. })
        );
    }

    #[test]
    fn optional_fields_may_be_empty() {
        assert_eq!(sanitize_field("Subject", "   ", MAX_SUBJECT_LEN, false).unwrap(), "");
        assert_matches!(
            sanitize_field("Message", "   ", MAX_MESSAGE_LEN, true),
            Err(ValidationError::Empty { field: "Message" })
        );
    }

    #[test]
    fn errors_read_well() {
        let err = ValidationError::TooLong { field: "Name", max: 100, actual: 120 };
        assert_eq!(err.to_string(), "Name too long: maximum 100 characters, got 120");
    }
}
