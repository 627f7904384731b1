//! Rule outcome types shared by every field validator.

use serde::Serialize;
use thiserror::Error;

/// Wire-level code identifying why a rule check failed. The serde
/// renames are the single source of the `VALIDATION_*` wire names;
/// rule kinds are outbound only and are never parsed back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleKind {
    #[serde(rename = "VALIDATION_TOO_SHORT")]
    TooShort,
    #[serde(rename = "VALIDATION_TOO_LONG")]
    TooLong,
    #[serde(rename = "VALIDATION_BAD_CHARS")]
    BadChars,
    #[serde(rename = "VALIDATION_BAD_FORMAT")]
    BadFormat,
    #[serde(rename = "VALIDATION_WEAK")]
    Weak,
}

/// A failed rule check: the taxonomy code plus the message shown inline
/// next to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RuleViolation {
    pub kind: RuleKind,
    pub message: String,
}

impl RuleViolation {
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
