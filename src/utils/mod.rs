//! Utility functions used across the application.
//!
//! - [`candidate_parser`] - Strict parsing of AI candidate lists
//! - [`client_info`] - Client IP and user agent extraction

pub mod candidate_parser;
pub mod client_info;
