//! Username validation rules.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule::{RuleKind, RuleViolation};

/// Minimum username length.
pub const USERNAME_MIN_LENGTH: usize = 8;

// ASCII letters and digits only, case-insensitive.
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[a-z0-9]+$").unwrap());

/// Validate a username against the local rules.
///
/// Length and character-set checks only. Whether the name is already
/// registered is an external lookup and is not decided here.
pub fn validate_username(value: &str) -> Result<(), RuleViolation> {
    if value.chars().count() < USERNAME_MIN_LENGTH {
        return Err(RuleViolation::new(
            RuleKind::TooShort,
            format!(
                "Username is too short. Minimum length is {}",
                USERNAME_MIN_LENGTH
            ),
        ));
    }

    if !USERNAME_REGEX.is_match(value) {
        return Err(RuleViolation::new(
            RuleKind::BadChars,
            "Username contains invalid characters.",
        ));
    }

    Ok(())
}
