//! grade-gate: validated login, grade entry and pass/fail averaging with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
