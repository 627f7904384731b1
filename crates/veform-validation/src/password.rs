//! Password validation rules.

use crate::rule::{RuleKind, RuleViolation};

/// Minimum password length.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum password length.
pub const PASSWORD_MAX_LENGTH: usize = 255;

/// Validate a password: length bounds plus the four character classes
/// (uppercase, lowercase, digit, everything else).
///
/// The weakness message always lists all four classes. The rule does
/// not report which class is missing, only that one is.
pub fn validate_password(password: &str) -> Result<(), RuleViolation> {
    // Bounds are over characters, not bytes, so multibyte input is not
    // under-counted.
    let length = password.chars().count();

    if length < PASSWORD_MIN_LENGTH {
        return Err(RuleViolation::new(
            RuleKind::TooShort,
            "Password is too short",
        ));
    }

    if length > PASSWORD_MAX_LENGTH {
        return Err(RuleViolation::new(RuleKind::TooLong, "Password is too long"));
    }

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    if !has_uppercase || !has_lowercase || !has_digit || !has_special {
        return Err(RuleViolation::new(
            RuleKind::Weak,
            "Password must include uppercase, lowercase, digits, and special characters",
        ));
    }

    Ok(())
}
