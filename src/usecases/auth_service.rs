//! Handle the login step: input-shape check first, then delegate to IdentityPort.

use crate::domain::{Credential, DomainError, Identity, ValidationResult, validate_login};
use crate::ports::IdentityPort;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const MSG_INVALID_CREDENTIALS: &str = "invalid email or password";

/// What the UI should do after a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted(Identity),
    /// Show `message` and let the user correct the input.
    Rejected(ValidationResult),
}

pub struct AuthService {
    identity: Arc<dyn IdentityPort>,
}

impl AuthService {
    pub fn new(identity: Arc<dyn IdentityPort>) -> Self {
        Self { identity }
    }

    /// Attempt a login. Shape failures and refused credentials come back as
    /// `LoginOutcome::Rejected`; only a failing identity backend is an `Err`.
    pub async fn login(&self, credential: &Credential) -> Result<LoginOutcome, DomainError> {
        let check = validate_login(&credential.email, &credential.password);
        if !check.is_valid {
            debug!(reason = %check.message, "login input rejected");
            return Ok(LoginOutcome::Rejected(check));
        }

        match self.identity.authenticate(credential).await {
            Ok(identity) => {
                info!(email = %identity.email, "login accepted");
                Ok(LoginOutcome::Accepted(identity))
            }
            Err(DomainError::InvalidCredentials) => {
                warn!(email = %credential.email, "identity service refused credential");
                Ok(LoginOutcome::Rejected(ValidationResult::invalid(
                    MSG_INVALID_CREDENTIALS,
                )))
            }
            Err(e) => Err(e),
        }
    }
}
