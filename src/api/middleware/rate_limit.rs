//! Rate limiting middleware using token bucket algorithm.
//!
//! Every suggestion request fans out to paid upstream APIs, so the endpoint is
//! limited per client IP. Requests exceeding the limit receive
//! `429 Too Many Requests`.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Limiter keyed on the socket peer address.
pub type PeerIpLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Limiter keyed on `X-Forwarded-For` / `X-Real-IP` / `Forwarded`, falling back
/// to the peer address.
pub type ProxyIpLayer =
    GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter keyed on the peer IP.
///
/// # Errors
///
/// Returns an error if `per_second` or `burst` is zero.
pub fn layer(per_second: u64, burst: u32) -> Result<PeerIpLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(per_second)
        .burst_size(burst)
        .finish()
        .context("Invalid rate limit configuration")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

/// Creates a rate limiter for deployments behind a trusted reverse proxy.
///
/// # Errors
///
/// Returns an error if `per_second` or `burst` is zero.
pub fn proxy_layer(per_second: u64, burst: u32) -> Result<ProxyIpLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .per_second(per_second)
        .burst_size(burst)
        .finish()
        .context("Invalid rate limit configuration")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
