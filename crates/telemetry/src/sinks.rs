// Path: crates/telemetry/src/sinks.rs
//! Defines abstract traits for metrics reporting, decoupling core logic from the backend.

use once_cell::sync::OnceCell;

// --- Static Sink Access ---

/// A no-op sink for use in tests or when telemetry is disabled.
#[derive(Debug, Clone, Copy)]
pub struct NopSink;

/// A lazily-initialized static reference to the global `MetricsSink` implementation.
pub static SINK: OnceCell<&'static dyn MetricsSink> = OnceCell::new();
static NOP_SINK: NopSink = NopSink;

/// Returns a static reference to the configured identity metrics sink.
/// If no sink has been initialized, it returns a no-op sink.
pub fn identity_metrics() -> &'static dyn IdentityMetricsSink {
    SINK.get().copied().unwrap_or(&NOP_SINK)
}

/// Returns a static reference to the configured call metrics sink.
/// If no sink has been initialized, it returns a no-op sink.
pub fn call_metrics() -> &'static dyn CallMetricsSink {
    SINK.get().copied().unwrap_or(&NOP_SINK)
}

/// Returns a static reference to the configured error metrics sink.
/// If no sink has been initialized, it returns a no-op sink.
pub fn error_metrics() -> &'static dyn ErrorMetricsSink {
    SINK.get().copied().unwrap_or(&NOP_SINK)
}

// --- Trait Definitions ---

/// A sink for metrics related to identity resolution.
pub trait IdentityMetricsSink: Send + Sync + std::fmt::Debug {
    /// Increments the counter of registry round trips, labeled by table (`identity_of`, `super_of`).
    fn inc_identity_lookup(&self, table: &'static str);
    /// Increments the counter of finished resolutions, labeled by outcome
    /// (`direct`, `super`, `unresolved`).
    fn inc_resolution(&self, outcome: &'static str);
    /// Observes the wall-clock duration of one resolution.
    fn observe_resolution_duration(&self, duration_secs: f64);
}
impl IdentityMetricsSink for NopSink {
    fn inc_identity_lookup(&self, _table: &'static str) {}
    fn inc_resolution(&self, _outcome: &'static str) {}
    fn observe_resolution_duration(&self, _duration_secs: f64) {}
}

/// A sink for metrics related to call introspection.
pub trait CallMetricsSink: Send + Sync + std::fmt::Debug {
    /// Increments the counter of described calls, labeled by section.
    fn inc_call_described(&self, section: &str);
    /// Increments the counter of enrichment attempts, labeled by rule and outcome
    /// (`applied`, `absent`).
    fn inc_enrichment(&self, rule: &str, outcome: &'static str);
}
impl CallMetricsSink for NopSink {
    fn inc_call_described(&self, _section: &str) {}
    fn inc_enrichment(&self, _rule: &str, _outcome: &'static str) {}
}

/// A sink for recording structured error metrics.
pub trait ErrorMetricsSink: Send + Sync + std::fmt::Debug {
    /// Increments a counter for a specific error, categorized by its kind and variant.
    fn inc_error(&self, kind: &'static str, variant: &'static str);
}
impl ErrorMetricsSink for NopSink {
    fn inc_error(&self, _kind: &'static str, _variant: &'static str) {}
}

/// A unified sink that implements all domain-specific traits, providing a single
/// point of implementation for metrics backends like Prometheus.
pub trait MetricsSink: IdentityMetricsSink + CallMetricsSink + ErrorMetricsSink {}

// Blanket implementation to allow any type that implements all sub-traits
// to be used as a `MetricsSink`.
impl<T> MetricsSink for T where T: IdentityMetricsSink + CallMetricsSink + ErrorMetricsSink {}
