//! Domain layer containing business entities and the contracts of the
//! outside world.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`gateways`] - Upstream service trait definitions (AI source, registrar)
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic lives in [`crate::application::services`].

pub mod entities;
pub mod gateways;
pub mod repositories;
