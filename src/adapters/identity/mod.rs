//! Identity adapters (implement IdentityPort).

pub mod demo_gate;

pub use demo_gate::DemoIdentityGate;
