//! Prometheus recorder for the suggestion metrics.
//!
//! The recorder is process-global; [`init_metrics`] installs it once and
//! hands out clones of the same handle afterwards.

use anyhow::{Context, Result};
use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
static INSTALL_GUARD: Mutex<()> = Mutex::new(());
static START_TIME: OnceLock<Instant> = OnceLock::new();

const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs the global Prometheus recorder and describes the service metrics.
///
/// # Errors
///
/// Returns an error if another recorder was installed by different code.
pub fn init_metrics() -> Result<PrometheusHandle> {
    if let Some(handle) = METRICS_HANDLE.get() {
        return Ok(handle.clone());
    }

    let _guard = INSTALL_GUARD
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(handle) = METRICS_HANDLE.get() {
        return Ok(handle.clone());
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;
    METRICS_HANDLE.set(handle.clone()).ok();

    describe_counter!(
        "suggest_rounds_total",
        "AI suggestion rounds run across all requests"
    );
    describe_counter!(
        "suggest_candidates_total",
        "Previously unseen candidates sent to the registrar"
    );
    describe_counter!(
        "suggest_available_total",
        "Candidates confirmed available and returned"
    );
    describe_histogram!(
        "suggest_result_size",
        "Number of domains returned per suggestion request"
    );
    START_TIME.get_or_init(Instant::now);

    Ok(handle)
}

/// Renders the exposition text, appending build and uptime gauges.
pub fn render_metrics(handle: &PrometheusHandle) -> String {
    let mut body = handle.render();
    if !body.is_empty() && !body.ends_with('\n') {
        body.push('\n');
    }

    body.push_str("# TYPE app_build_info gauge\n");
    body.push_str(&format!("app_build_info{{version=\"{BUILD_VERSION}\"}} 1\n"));

    let uptime = START_TIME
        .get()
        .map(|start| start.elapsed().as_secs_f64())
        .unwrap_or_default();
    body.push_str("# TYPE app_uptime_seconds gauge\n");
    body.push_str(&format!("app_uptime_seconds {uptime}\n"));

    body
}
