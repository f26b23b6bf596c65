// Metrics hooks for the edge builder.
//
// Callers install a global `GraphMetrics` implementation via
// [`set_graph_metrics`]; every call to `build_graph_edges` then reports its
// latency and pair counts. No metrics backend is linked by this crate.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::graph::EdgeBuildReport;

/// Metrics observer for edge builds.
pub trait GraphMetrics: Send + Sync {
    /// Record one completed build. `latency` covers the whole call.
    fn record_edge_build(&self, latency: Duration, report: &EdgeBuildReport);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn GraphMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn GraphMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn GraphMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global graph metrics recorder.
pub fn set_graph_metrics(recorder: Option<Arc<dyn GraphMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
