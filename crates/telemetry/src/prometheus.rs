// Path: crates/telemetry/src/prometheus.rs
//! A concrete implementation of the metrics sinks using the Prometheus crate.

use crate::sinks::*;
use once_cell::sync::OnceCell;
use prometheus::{
    exponential_buckets, register_histogram, register_int_counter_vec, Histogram, IntCounterVec,
};

// --- Metric Statics ---
// The collectors are initialized exactly once by `install`.

static IDENTITY_LOOKUPS_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();
static IDENTITY_RESOLUTIONS_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();
static IDENTITY_RESOLUTION_DURATION_SECONDS: OnceCell<Histogram> = OnceCell::new();
static CALLS_DESCRIBED_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();
static CALL_ENRICHMENTS_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();
static ERRORS_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();

#[derive(Debug, Clone, Copy)]
pub struct PrometheusSink;

/// Runs `$body` with the collector bound to `$m` if `install()` has been called.
/// Before installation the sink is never handed out, so this only guards misuse.
macro_rules! with_metric {
    ($metric:ident, |$m:ident| $body:expr) => {
        if let Some($m) = $metric.get() {
            $body;
        }
    };
}

impl IdentityMetricsSink for PrometheusSink {
    fn inc_identity_lookup(&self, table: &'static str) {
        with_metric!(IDENTITY_LOOKUPS_TOTAL, |m| m.with_label_values(&[table]).inc());
    }
    fn inc_resolution(&self, outcome: &'static str) {
        with_metric!(IDENTITY_RESOLUTIONS_TOTAL, |m| m
            .with_label_values(&[outcome])
            .inc());
    }
    fn observe_resolution_duration(&self, duration_secs: f64) {
        with_metric!(IDENTITY_RESOLUTION_DURATION_SECONDS, |m| m
            .observe(duration_secs));
    }
}

impl CallMetricsSink for PrometheusSink {
    fn inc_call_described(&self, section: &str) {
        with_metric!(CALLS_DESCRIBED_TOTAL, |m| m.with_label_values(&[section]).inc());
    }
    fn inc_enrichment(&self, rule: &str, outcome: &'static str) {
        with_metric!(CALL_ENRICHMENTS_TOTAL, |m| m
            .with_label_values(&[rule, outcome])
            .inc());
    }
}

impl ErrorMetricsSink for PrometheusSink {
    fn inc_error(&self, kind: &'static str, variant: &'static str) {
        with_metric!(ERRORS_TOTAL, |m| m.with_label_values(&[kind, variant]).inc());
    }
}

/// Initializes all Prometheus metrics collectors and returns a static reference to the sink.
/// This function must be called only once at application startup.
#[allow(clippy::expect_used)]
pub fn install() -> Result<&'static dyn MetricsSink, prometheus::Error> {
    IDENTITY_LOOKUPS_TOTAL
        .set(register_int_counter_vec!(
            "chainlens_identity_lookups_total",
            "Total identity registry round trips, by table.",
            &["table"]
        )?)
        .expect("static already initialized");
    IDENTITY_RESOLUTIONS_TOTAL
        .set(register_int_counter_vec!(
            "chainlens_identity_resolutions_total",
            "Total identity resolutions, by outcome.",
            &["outcome"]
        )?)
        .expect("static already initialized");
    IDENTITY_RESOLUTION_DURATION_SECONDS
        .set(register_histogram!(
            "chainlens_identity_resolution_duration_seconds",
            "Latency of a full identity resolution, including all round trips.",
            exponential_buckets(0.001, 2.0, 15)?
        )?)
        .expect("static already initialized");
    CALLS_DESCRIBED_TOTAL
        .set(register_int_counter_vec!(
            "chainlens_calls_described_total",
            "Total calls decoded into descriptors, by section.",
            &["section"]
        )?)
        .expect("static already initialized");
    CALL_ENRICHMENTS_TOTAL
        .set(register_int_counter_vec!(
            "chainlens_call_enrichments_total",
            "Total enrichment lookups, by rule and outcome.",
            &["rule", "outcome"]
        )?)
        .expect("static already initialized");
    ERRORS_TOTAL
        .set(register_int_counter_vec!(
            "chainlens_errors_total",
            "Total number of errors, categorized by type and variant.",
            &["kind", "variant"]
        )?)
        .expect("static already initialized");

    static SINK: PrometheusSink = PrometheusSink;
    Ok(&SINK)
}
