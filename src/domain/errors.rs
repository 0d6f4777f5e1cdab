//! Domain errors. Used by ports and use cases.
//!
//! Validation failures are not errors: they travel as `ValidationResult`.
//! These variants cover the infrastructure around the core.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// The identity backend refused the credential.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Identity service error: {0}")]
    Identity(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Terminal output failed: {0}")]
    Terminal(String),
}
