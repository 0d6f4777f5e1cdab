//! Demo identity adapter. Accepts every credential that reaches it.
//!
//! AuthService only forwards shape-valid credentials, so in practice any well-formed
//! email with a 6+ character password logs in. Nothing is stored.

use crate::domain::{Credential, DomainError, Identity, display_name};
use crate::ports::IdentityPort;
use tracing::info;

/// Identity gate with no backend.
pub struct DemoIdentityGate;

impl DemoIdentityGate {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DemoIdentityGate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IdentityPort for DemoIdentityGate {
    async fn authenticate(&self, credential: &Credential) -> Result<Identity, DomainError> {
        info!(email = %credential.email, "[DEMO] accepting credential without a backend");
        Ok(Identity {
            email: credential.email.trim().to_string(),
            display_name: display_name(credential.email.trim()),
        })
    }
}
