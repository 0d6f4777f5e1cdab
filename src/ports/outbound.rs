//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Credential, DomainError, Identity};

/// Identity service. Decides whether a shape-valid credential belongs to a user.
#[async_trait::async_trait]
pub trait IdentityPort: Send + Sync {
    /// Authenticate a credential that already passed `validate_login`.
    ///
    /// Returns `DomainError::InvalidCredentials` when the backend refuses the pair;
    /// other variants mean the backend itself failed.
    async fn authenticate(&self, credential: &Credential) -> Result<Identity, DomainError>;
}
