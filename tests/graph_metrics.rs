use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use memgraph::{
    build_graph_edges, set_graph_metrics, EdgeBuildReport, EdgeConfig, GraphDocument,
    GraphMetrics,
};

#[derive(Default)]
struct RecordingMetrics {
    builds: AtomicUsize,
    last: Mutex<Option<EdgeBuildReport>>,
}

impl GraphMetrics for RecordingMetrics {
    fn record_edge_build(&self, _latency: Duration, report: &EdgeBuildReport) {
        self.builds.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(*report);
    }
}

#[test]
fn metrics_recorder_sees_each_build() {
    let recorder = Arc::new(RecordingMetrics::default());
    set_graph_metrics(Some(recorder.clone()));

    let docs = vec![
        GraphDocument::new("a").with_embedding(vec![1.0]).with_memory("m"),
        GraphDocument::new("b").with_embedding(vec![1.0]).with_memory("n"),
    ];
    let built = build_graph_edges(&docs, &EdgeConfig::default());

    set_graph_metrics(None);

    assert_eq!(recorder.builds.load(Ordering::SeqCst), 1);
    let last = recorder.last.lock().unwrap();
    assert_eq!(*last, Some(built.report));
    assert_eq!(built.report.doc_memory_edges, 2);
    assert_eq!(built.report.doc_doc_edges, 1);
}
