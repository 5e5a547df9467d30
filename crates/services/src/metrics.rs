// Path: crates/services/src/metrics.rs

use chainlens_telemetry::error_metrics;
use chainlens_types::error::ErrorCode;
use std::fmt::Display;

/// Logs `e` under `component` and counts it by `kind` and error code.
pub(crate) fn record_error<E: ErrorCode + Display>(component: &str, kind: &'static str, e: E) -> E {
    log::warn!("[{}] {}", component, e);
    error_metrics().inc_error(kind, e.code());
    e
}
