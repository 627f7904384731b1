//! Envelope-producing field validators.
//!
//! Each validator runs the local rules from `veform-validation` and
//! wraps the outcome in an [`Envelope`]: status 200 with a confirmation
//! message on success, status 400 with `{kind, error}` in `data` on
//! failure. Validators never return an error to the caller.
//!
//! The signatures are async for parity with the network-backed
//! uniqueness checks this API is expected to grow; the current rules
//! complete without suspending, and independent fields can be checked
//! in parallel in any order.

use serde_json::{Map, Value};
use veform_validation::{self as rules, RuleViolation};

use crate::envelope::Envelope;

const STATUS_OK: u16 = 200;
const STATUS_INVALID: u16 = 400;

fn success(confirmation: &str) -> Envelope {
    let mut data = Map::new();
    data.insert("message".into(), Value::String(confirmation.into()));
    Envelope::new(STATUS_OK, "Validation Successful", data)
}

fn failure(violation: RuleViolation) -> Envelope {
    let mut data = Map::new();
    // The kind's wire name comes from its serde rename.
    match serde_json::to_value(violation.kind) {
        Ok(kind) => {
            data.insert("kind".into(), kind);
        }
        Err(_) => {
            data.insert("kind".into(), Value::Null);
        }
    }
    data.insert("error".into(), Value::String(violation.message));
    Envelope::new(STATUS_INVALID, "Validation Error", data)
}

/// Validate a username's local rules (length, character set).
pub async fn validate_username(value: &str) -> Envelope {
    match rules::validate_username(value) {
        Ok(()) => success("Username is valid."),
        Err(violation) => failure(violation),
    }
}

/// Validate an email address's format.
pub async fn validate_email(value: &str) -> Envelope {
    match rules::validate_email(value) {
        Ok(()) => success("Email is valid."),
        Err(violation) => failure(violation),
    }
}

/// Validate a password's length bounds and character classes.
pub async fn validate_password(value: &str) -> Envelope {
    match rules::validate_password(value) {
        Ok(()) => success("Password is valid"),
        Err(violation) => failure(violation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn data_str<'a>(envelope: &'a Envelope, key: &str) -> &'a str {
        match envelope.data.get(key) {
            Some(Value::String(s)) => s,
            other => panic!("expected string under {:?}, got {:?}", key, other),
        }
    }

    #[tokio::test]
    async fn test_username_success_envelope() {
        let envelope = validate_username("holybyte").await;
        assert_eq!(envelope.status, 200);
        assert!(!envelope.error);
        assert_eq!(envelope.message, "Validation Successful");
        assert_eq!(data_str(&envelope, "message"), "Username is valid.");
    }

    #[tokio::test]
    async fn test_username_failure_envelope() {
        let envelope = validate_username("ab").await;
        assert_eq!(envelope.status, 400);
        assert!(envelope.error);
        assert_eq!(envelope.message, "Validation Error");
        assert_eq!(data_str(&envelope, "kind"), "VALIDATION_TOO_SHORT");
        assert_eq!(
            data_str(&envelope, "error"),
            "Username is too short. Minimum length is 8"
        );
    }

    #[tokio::test]
    async fn test_email_envelopes() {
        let ok = validate_email("user@example.com").await;
        assert_eq!(ok.status, 200);
        assert_eq!(data_str(&ok, "message"), "Email is valid.");

        let bad = validate_email("not-an-email").await;
        assert_eq!(bad.status, 400);
        assert_eq!(data_str(&bad, "kind"), "VALIDATION_BAD_FORMAT");
        assert_eq!(data_str(&bad, "error"), "Email is invalid.");
    }

    #[tokio::test]
    async fn test_password_envelopes() {
        let ok = validate_password("Str0ng!Pass").await;
        assert_eq!(ok.status, 200);
        assert_eq!(data_str(&ok, "message"), "Password is valid");

        let weak = validate_password("alllowercase").await;
        assert_eq!(weak.status, 400);
        assert_eq!(data_str(&weak, "kind"), "VALIDATION_WEAK");
        assert_eq!(
            data_str(&weak, "error"),
            "Password must include uppercase, lowercase, digits, and special characters"
        );
    }

    #[tokio::test]
    async fn test_fields_validate_independently() {
        let (username, email, password) = tokio::join!(
            validate_username("holybyte"),
            validate_email("user@example.com"),
            validate_password("short"),
        );
        assert_eq!(username.status, 200);
        assert_eq!(email.status, 200);
        assert_eq!(password.status, 400);
    }
}
