//! HTTP request handlers for API endpoints.

pub mod health;
pub mod metrics;
pub mod suggest;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use suggest::suggest_domains_handler;
