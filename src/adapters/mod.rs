//! Infrastructure adapters. Implement ports.
//!
//! Identity backend and terminal UI. Map errors to DomainError.

pub mod identity;
pub mod ui;
