//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod credentials;
pub mod entities;
pub mod errors;
pub mod grades;
pub mod navigation;

pub use credentials::{display_name, validate_login};
pub use entities::{AverageResult, Credential, GradeSet, GradeSlot, Identity, ValidationResult};
pub use errors::DomainError;
pub use grades::{PASS_THRESHOLD, compute_average, validate_grades};
pub use navigation::{Nav, Screen};
