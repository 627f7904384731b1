//! Per-field check adapters for form binding.
//!
//! A form layer rarely wants the whole envelope; it wants "is this
//! field ok, and if not, what do I print next to it". The adapters
//! collapse an envelope into that shape and guarantee they never
//! signal a fault to the caller.

use serde::Serialize;
use serde_json::Value;

use crate::envelope::Envelope;
use crate::validators;

/// Binary validation outcome for a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCheck {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl FieldCheck {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
        }
    }
}

/// Collapse an envelope into a [`FieldCheck`].
///
/// A failing envelope is expected to carry its message under
/// `data.error`; one that does not is an internal fault, which gets
/// logged and swallowed into a fixed message rather than propagated.
fn adapt(envelope: Envelope) -> FieldCheck {
    if envelope.status == 200 {
        return FieldCheck::valid();
    }

    match envelope.data.get("error") {
        Some(Value::String(message)) => FieldCheck::invalid(message.clone()),
        _ => {
            tracing::warn!(
                status = envelope.status,
                "failing envelope carried no error message"
            );
            FieldCheck::invalid("An unexpected error occurred")
        }
    }
}

/// Check a username for form binding.
pub async fn check_username(username: &str) -> FieldCheck {
    adapt(validators::validate_username(username).await)
}

/// Check an email address for form binding.
pub async fn check_email(email: &str) -> FieldCheck {
    adapt(validators::validate_email(email).await)
}

/// Check a password for form binding.
pub async fn check_password(password: &str) -> FieldCheck {
    adapt(validators::validate_password(password).await)
}
