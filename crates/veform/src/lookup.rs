//! Deferred uniqueness-lookup seam.
//!
//! "Is this username or email already registered" needs a profile
//! backend the local rules deliberately know nothing about. The trait
//! below is the injection point for that backend. No validator consumes
//! it yet; wiring it up is future work, and its network semantics are
//! not defined here.

use async_trait::async_trait;
use thiserror::Error;

/// Backend fault while answering a uniqueness query.
#[derive(Debug, Error)]
#[error("profile lookup failed: {0}")]
pub struct LookupError(pub String);

/// Uniqueness queries against a profile store.
#[async_trait]
pub trait ProfileLookup: Send + Sync {
    async fn username_taken(&self, username: &str) -> Result<bool, LookupError>;

    async fn email_taken(&self, email: &str) -> Result<bool, LookupError>;
}

/// Default collaborator for deployments without a profile backend:
/// every name is considered available.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalOnly;

#[async_trait]
impl ProfileLookup for LocalOnly {
    async fn username_taken(&self, _username: &str) -> Result<bool, LookupError> {
        Ok(false)
    }

    async fn email_taken(&self, _email: &str) -> Result<bool, LookupError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EverythingTaken;

    #[async_trait]
    impl ProfileLookup for EverythingTaken {
        async fn username_taken(&self, _username: &str) -> Result<bool, LookupError> {
            Ok(true)
        }

        async fn email_taken(&self, _email: &str) -> Result<bool, LookupError> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn test_local_only_reports_everything_available() {
        let lookup: &dyn ProfileLookup = &LocalOnly;
        assert!(!lookup.username_taken("holybyte").await.unwrap());
        assert!(!lookup.email_taken("user@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_seam_accepts_alternate_backends() {
        let lookup: &dyn ProfileLookup = &EverythingTaken;
        assert!(lookup.username_taken("holybyte").await.unwrap());
    }
}
