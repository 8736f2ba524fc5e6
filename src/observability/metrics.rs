//! Metrics collection.
//!
//! # Metrics
//! - `bank_details_ifsc_lookups_total` (counter): lookups by outcome
//! - `bank_details_submissions_total` (counter): submissions by outcome
//! - `bank_details_service_call_duration_seconds` (histogram): latency by operation
//!
//! # Design Decisions
//! - Recording is global and can be switched off from config
//! - Labels are static strings to keep cardinality fixed

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(true);

/// Turn metric recording on or off.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

fn enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Record the outcome of an IFSC lookup.
pub fn record_ifsc_lookup(outcome: &'static str) {
    if enabled() {
        metrics::counter!("bank_details_ifsc_lookups_total", "outcome" => outcome).increment(1);
    }
}

/// Record the outcome of a bank-details submission.
pub fn record_submission(outcome: &'static str) {
    if enabled() {
        metrics::counter!("bank_details_submissions_total", "outcome" => outcome).increment(1);
    }
}

/// Record how long a profile service call took.
pub fn record_service_call(operation: &'static str, started: Instant) {
    if enabled() {
        metrics::histogram!(
            "bank_details_service_call_duration_seconds",
            "operation" => operation
        )
        .record(started.elapsed().as_secs_f64());
    }
}
