//! Email validation rules.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule::{RuleKind, RuleViolation};

// RFC-5322-derived address grammar: dot-atom or quoted-string local
// part, then a dotted-label domain or a bracketed IPv4 literal.
// Anchored over the whole input and case-insensitive.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(?i)^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*"#,
        r#"|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")"#,
        r#"@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?"#,
        r#"|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}"#,
        r#"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?"#,
        r#"|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"#,
    ))
    .unwrap()
});

/// Validate an email address against the address grammar.
///
/// Format only. Mailbox existence and uniqueness are external lookups
/// and are not decided here.
pub fn validate_email(value: &str) -> Result<(), RuleViolation> {
    if !EMAIL_REGEX.is_match(value) {
        return Err(RuleViolation::new(RuleKind::BadFormat, "Email is invalid."));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last@sub.example.co.uk").is_ok());
        assert!(validate_email("user+tag@example.com").is_ok());
        assert!(validate_email("user_name@example-domain.com").is_ok());
        assert!(validate_email("User@Example.COM").is_ok());
    }

    #[test]
    fn test_quoted_local_part() {
        assert!(validate_email("\"john..doe\"@example.com").is_ok());
    }

    #[test]
    fn test_ipv4_literal_domain() {
        assert!(validate_email("user@[192.168.1.1]").is_ok());
        assert!(validate_email("user@[300.1.1.1]").is_err());
    }

    #[test]
    fn test_invalid_emails() {
        for value in [
            "",
            "not-an-email",
            "user@",
            "@example.com",
            "user@@example.com",
            "user@example",
            "user@.com",
            "user@example..com",
            "user name@example.com",
            "User Name <user@example.com>",
        ] {
            let err = validate_email(value).unwrap_err();
            assert_eq!(err.kind, RuleKind::BadFormat);
            assert_eq!(err.message, "Email is invalid.");
        }
    }
}
