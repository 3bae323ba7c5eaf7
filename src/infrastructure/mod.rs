//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`gateways`] - HTTP clients for Gemini and GoDaddy
//! - [`persistence`] - PostgreSQL repository implementations

pub mod gateways;
pub mod persistence;
