//! Metrics collection.
//!
//! # Metrics
//! - `navigations_total` (counter): by outcome (rendered, superseded, failed, no_container)
//! - `module_loads_total` (counter): by result (loaded, fallback, builtin)
//! - `module_registry_size` (gauge): loaded page modules
//! - `prefetch_total` (counter): by event (scheduled, duplicate, hit, miss, failed)

pub fn record_navigation(outcome: &'static str) {
    metrics::counter!("navigations_total", "outcome" => outcome).increment(1);
}

pub fn record_module_load(result: &'static str) {
    metrics::counter!("module_loads_total", "result" => result).increment(1);
}

pub fn record_registry_size(size: usize) {
    metrics::gauge!("module_registry_size").set(size as f64);
}

pub fn record_prefetch(event: &'static str) {
    metrics::counter!("prefetch_total", "event" => event).increment(1);
}
