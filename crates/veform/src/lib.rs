//! # veform
//!
//! Registration field validation with a uniform response envelope.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use veform::{check_email, check_password, check_username};
//!
//! let username = check_username("holybyte").await;
//! assert!(username.is_valid);
//!
//! let email = check_email("not-an-email").await;
//! assert_eq!(email.error.as_deref(), Some("Email is invalid."));
//! ```
//!
//! ## Architecture
//!
//! - [`envelope`] — the `{status, error, message, data}` carrier every
//!   validator returns, with fail-closed JSON serialize/deserialize.
//! - [`validators`] — envelope-producing checks for username, email,
//!   and password, built on the pure rules in `veform-validation`.
//! - [`check`] — per-field adapters that collapse an envelope into
//!   `{isValid, error}` for form binding.
//! - [`lookup`] — the deferred seam for backend uniqueness checks.
//!
//! Validators never raise: success and failure are both ordinary
//! envelopes, and the check adapters additionally swallow any
//! unanticipated fault into a fixed message.

pub mod check;
pub mod envelope;
pub mod lookup;
pub mod validators;

pub use check::{check_email, check_password, check_username, FieldCheck};
pub use envelope::Envelope;
pub use lookup::{LocalOnly, LookupError, ProfileLookup};
pub use validators::{validate_email, validate_password, validate_username};

// Re-export the rule layer for callers that want raw outcomes without
// the envelope.
pub use veform_validation as rules;
