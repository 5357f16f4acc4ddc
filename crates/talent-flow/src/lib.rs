//! Recruitment pipeline workflows for a multi-tenant HR administration
//! platform.
//!
//! The heart of the crate is the status-sync engine in
//! [`workflows::recruitment::engine`]: interview outcomes propagate to the
//! owning application's status, and application statuses aggregate into the
//! candidate's overall status. Everything else — configuration, telemetry,
//! the HTTP router — is the surface that lets a service host those rules.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
