//! Application use cases. Orchestrate domain logic via ports.

pub mod app_flow;
pub mod auth_service;

pub use app_flow::{AppEvent, AppState};
pub use auth_service::{AuthService, LoginOutcome};
