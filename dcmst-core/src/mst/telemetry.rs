//! Optional `metrics` counters for constrained MST runs.

use super::Algorithm;

#[cfg(feature = "metrics")]
pub(super) fn record_accepted(algorithm: Algorithm) {
    metrics::counter!("dcmst_edges_accepted_total", "algorithm" => algorithm.as_str()).increment(1);
}

#[cfg(not(feature = "metrics"))]
pub(super) fn record_accepted(_algorithm: Algorithm) {}

#[cfg(feature = "metrics")]
pub(super) fn record_degree_rejection(algorithm: Algorithm) {
    metrics::counter!("dcmst_degree_rejections_total", "algorithm" => algorithm.as_str())
        .increment(1);
}

#[cfg(not(feature = "metrics"))]
pub(super) fn record_degree_rejection(_algorithm: Algorithm) {}

#[cfg(feature = "metrics")]
pub(super) fn record_infeasible(algorithm: Algorithm) {
    metrics::counter!("dcmst_infeasible_total", "algorithm" => algorithm.as_str()).increment(1);
}

#[cfg(not(feature = "metrics"))]
pub(super) fn record_infeasible(_algorithm: Algorithm) {}
