//! veform Validation Core
//!
//! Pure rule functions for registration fields. Each rule is a total
//! function from a field's string value to a pass/fail outcome with an
//! explanatory message; nothing here performs I/O or keeps state
//! between calls.

pub mod email;
pub mod password;
pub mod rule;
pub mod username;

// Re-export all validators
pub use email::*;
pub use password::*;
pub use rule::{RuleKind, RuleViolation};
pub use username::*;
