//! Edge list construction for the memory graph.
//!
//! Documents are first narrowed to the selected space: memories outside the
//! space are dropped, the per-document memory limit is applied, and documents
//! left without memories leave the graph. Three kinds of edges are then
//! produced, in this order:
//!
//! - **doc-memory**: one per visible memory entry, always at full strength.
//! - **version**: memory-to-memory links from `memoryRelations` (or the
//!   legacy `parentMemoryId`), drawn only when both memories are visible.
//! - **doc-doc**: pairwise [`semantic_similarity`] over document summary
//!   embeddings, kept when the score clears `min_similarity`.
//!
//! A pair whose embeddings cannot be compared (dimension mismatch, non-finite
//! elements) is logged and skipped; it never fails the whole build.

use std::collections::HashSet;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, warn, Level};

use crate::config::EdgeConfig;
use crate::error::SimilarityError;
use crate::metrics::metrics_recorder;
use crate::similarity::semantic_similarity;
use crate::visual::{connection_color, connection_visual_props, ConnectionVisualProps};


/// `selected_space` value that disables space filtering.
pub const ALL_SPACES: &str = "all";

/// Space assigned to memories that carry neither a container tag nor a
/// space id.
pub const DEFAULT_SPACE: &str = "default";

/// Fixed weighting for version-chain edges.
pub const VERSION_VISUAL_PROPS: ConnectionVisualProps = ConnectionVisualProps {
    opacity: 0.8,
    thickness: 1.0,
    glow: 0.0,
    pulse_duration_ms: 3000,
};

/// A document node as handed over by the dashboard API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDocument {
    pub id: String,
    #[serde(default)]
    pub summary_embedding: Option<Vec<f32>>,
    #[serde(
        default,
        rename = "memoryEntries",
        deserialize_with = "crate::serde_null::deserialize"
    )]
    pub memories: Vec<GraphMemory>,
}

impl GraphDocument {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.summary_embedding = Some(embedding);
        self
    }

    /// Attach a memory in the default space with no relations.
    pub fn with_memory(self, id: impl Into<String>) -> Self {
        self.with_memory_entry(GraphMemory::new(id))
    }

    pub fn with_memory_entry(mut self, memory: GraphMemory) -> Self {
        self.memories.push(memory);
        self
    }
}

/// A memory entry attached to a document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMemory {
    pub id: String,
    #[serde(default)]
    pub space_container_tag: Option<String>,
    #[serde(default)]
    pub space_id: Option<String>,
    /// Legacy single-parent link, read as an `updates` relation when
    /// `memory_relations` is empty.
    #[serde(default)]
    pub parent_memory_id: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_null::deserialize")]
    pub memory_relations: Vec<MemoryRelation>,
}

impl GraphMemory {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn in_space(mut self, space: impl Into<String>) -> Self {
        self.space_container_tag = Some(space.into());
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_memory_id = Some(parent_id.into());
        self
    }

    pub fn with_relation(mut self, target: impl Into<String>, relation: RelationType) -> Self {
        self.memory_relations.push(MemoryRelation {
            target_memory_id: target.into(),
            relation_type: relation,
        });
        self
    }

    /// Container tag, then space id, then [`DEFAULT_SPACE`].
    pub fn space(&self) -> &str {
        self.space_container_tag
            .as_deref()
            .or(self.space_id.as_deref())
            .unwrap_or(DEFAULT_SPACE)
    }

    /// Parent memories of this entry, one per target.
    ///
    /// A repeated target keeps its first position and its last relation type.
    fn parent_relations(&self) -> Vec<(&str, RelationType)> {
        if self.memory_relations.is_empty() {
            return self
                .parent_memory_id
                .as_deref()
                .map(|parent| vec![(parent, RelationType::Updates)])
                .unwrap_or_default();
        }

        let mut relations: Vec<(&str, RelationType)> = Vec::new();
        for rel in &self.memory_relations {
            match relations
                .iter_mut()
                .find(|(target, _)| *target == rel.target_memory_id)
            {
                Some(existing) => existing.1 = rel.relation_type,
                None => relations.push((rel.target_memory_id.as_str(), rel.relation_type)),
            }
        }
        relations
    }
}

/// A link from a memory to one of its earlier versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryRelation {
    pub target_memory_id: String,
    pub relation_type: RelationType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationType {
    Updates,
    Extends,
    Derives,
}

impl RelationType {
    /// Edge color for this relation.
    pub fn color(self) -> &'static str {
        match self {
            RelationType::Updates => "rgba(147, 77, 253, 0.5)",
            RelationType::Extends => "rgba(16, 185, 129, 0.5)",
            RelationType::Derives => "rgba(147, 197, 253, 0.5)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeType {
    DocMemory,
    DocDoc,
    Version,
}

/// A renderable connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub similarity: f64,
    pub visual_props: ConnectionVisualProps,
    pub color: String,
    pub edge_type: EdgeType,
    /// Set on version edges only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_type: Option<RelationType>,
}

/// Counters describing one edge build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EdgeBuildReport {
    /// Documents left after space filtering.
    pub documents_in_view: usize,
    /// Documents that took part in the doc-doc pass.
    pub documents_compared: usize,
    /// Document pairs scored.
    pub pairs_compared: usize,
    /// Pairs dropped because their embeddings could not be compared.
    pub pairs_skipped: usize,
    pub doc_memory_edges: usize,
    pub version_edges: usize,
    pub doc_doc_edges: usize,
}

/// Result of [`build_graph_edges`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdges {
    pub edges: Vec<GraphEdge>,
    pub report: EdgeBuildReport,
}

/// A document as it appears in the selected space.
struct ViewDocument<'a> {
    doc: &'a GraphDocument,
    memories: Vec<&'a GraphMemory>,
}

/// Build the edge list for `documents`.
///
/// doc-memory edges come first, with documents grouped by the space of
/// their first visible memory (spaces in first-seen order). Version edges
/// follow in input order, then doc-doc edges in `(i, j)` order with `i < j`
/// over the visible documents. The order does not depend on
/// `cfg.use_parallel`.
pub fn build_graph_edges(documents: &[GraphDocument], cfg: &EdgeConfig) -> GraphEdges {
    let start = Instant::now();
    let span = tracing::span!(
        Level::DEBUG,
        "memgraph.build_graph_edges",
        documents = documents.len(),
        selected_space = %cfg.selected_space,
        max_documents = cfg.max_documents
    );
    let _guard = span.enter();

    let mut report = EdgeBuildReport::default();
    let view = documents_in_view(documents, cfg);
    report.documents_in_view = view.len();

    let mut edges = doc_memory_edges(&view, cfg);
    report.doc_memory_edges = edges.len();

    let versions = version_edges(documents, &view);
    report.version_edges = versions.len();
    edges.extend(versions);

    let compared = &view[..view.len().min(cfg.max_documents)];
    report.documents_compared = compared.len();

    let scores = score_pairs(compared, cfg.use_parallel);
    report.pairs_compared = scores.len();

    for ((i, j), score) in scores {
        let (doc_i, doc_j) = (compared[i].doc, compared[j].doc);
        match score {
            Ok(similarity) if similarity > cfg.min_similarity => {
                edges.push(GraphEdge {
                    id: format!("doc-doc-{}-{}", doc_i.id, doc_j.id),
                    source: doc_i.id.clone(),
                    target: doc_j.id.clone(),
                    similarity,
                    visual_props: connection_visual_props(similarity),
                    color: connection_color(similarity, cfg.doc_doc_hue),
                    edge_type: EdgeType::DocDoc,
                    relation_type: None,
                });
                report.doc_doc_edges += 1;
            }
            Ok(_) => {}
            Err(err) => {
                report.pairs_skipped += 1;
                warn!(
                    source = %doc_i.id,
                    target = %doc_j.id,
                    error = %err,
                    "similarity_pair_skipped"
                );
            }
        }
    }

    let latency = start.elapsed();
    info!(
        documents_in_view = report.documents_in_view,
        doc_memory_edges = report.doc_memory_edges,
        version_edges = report.version_edges,
        doc_doc_edges = report.doc_doc_edges,
        pairs_compared = report.pairs_compared,
        pairs_skipped = report.pairs_skipped,
        elapsed_micros = latency.as_micros() as u64,
        "edge_build_success"
    );
    if let Some(recorder) = metrics_recorder() {
        recorder.record_edge_build(latency, &report);
    }

    GraphEdges { edges, report }
}

/// Parse a JSON array of documents and build its edge list.
pub fn build_graph_edges_from_json(
    documents_json: &str,
    cfg: &EdgeConfig,
) -> Result<GraphEdges, serde_json::Error> {
    let documents: Vec<GraphDocument> = serde_json::from_str(documents_json)?;
    Ok(build_graph_edges(&documents, cfg))
}

fn documents_in_view<'a>(
    documents: &'a [GraphDocument],
    cfg: &EdgeConfig,
) -> Vec<ViewDocument<'a>> {
    let all_spaces = cfg.selected_space == ALL_SPACES;
    let limit = match cfg.memory_limit {
        Some(limit) if limit > 0 && !all_spaces => limit,
        _ => usize::MAX,
    };

    documents
        .iter()
        .filter_map(|doc| {
            let memories: Vec<&GraphMemory> = doc
                .memories
                .iter()
                .filter(|memory| all_spaces || memory.space() == cfg.selected_space)
                .take(limit)
                .collect();
            (!memories.is_empty()).then_some(ViewDocument { doc, memories })
        })
        .collect()
}

fn doc_memory_edges(view: &[ViewDocument<'_>], cfg: &EdgeConfig) -> Vec<GraphEdge> {
    let mut spaces: Vec<&str> = Vec::new();
    for entry in view {
        let space = entry.memories[0].space();
        if !spaces.contains(&space) {
            spaces.push(space);
        }
    }

    let visual_props = connection_visual_props(1.0);
    let mut edges = Vec::new();
    for space in spaces {
        for entry in view.iter().filter(|e| e.memories[0].space() == space) {
            for memory in &entry.memories {
                edges.push(GraphEdge {
                    id: format!("edge-{}-{}", entry.doc.id, memory.id),
                    source: entry.doc.id.clone(),
                    target: memory.id.clone(),
                    similarity: 1.0,
                    visual_props,
                    color: cfg.doc_memory_color.clone(),
                    edge_type: EdgeType::DocMemory,
                    relation_type: None,
                });
            }
        }
    }
    edges
}

fn version_edges(documents: &[GraphDocument], view: &[ViewDocument<'_>]) -> Vec<GraphEdge> {
    let visible: HashSet<&str> = view
        .iter()
        .flat_map(|entry| entry.memories.iter().map(|m| m.id.as_str()))
        .collect();

    let mut edges = Vec::new();
    for memory in documents.iter().flat_map(|doc| doc.memories.iter()) {
        if !visible.contains(memory.id.as_str()) {
            continue;
        }
        for (parent, relation) in memory.parent_relations() {
            if !visible.contains(parent) {
                continue;
            }
            edges.push(GraphEdge {
                id: format!("version-{}-{}", parent, memory.id),
                source: parent.to_string(),
                target: memory.id.clone(),
                similarity: 1.0,
                visual_props: VERSION_VISUAL_PROPS,
                color: relation.color().to_string(),
                edge_type: EdgeType::Version,
                relation_type: Some(relation),
            });
        }
    }
    edges
}

type PairScore = ((usize, usize), Result<f64, SimilarityError>);

fn score_pair(view: &[ViewDocument<'_>], i: usize, j: usize) -> PairScore {
    let score = semantic_similarity(
        view[i].doc.summary_embedding.as_deref(),
        view[j].doc.summary_embedding.as_deref(),
    );
    ((i, j), score)
}

fn pair_indices(n: usize) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect()
}

#[cfg(feature = "parallel")]
fn score_pairs(view: &[ViewDocument<'_>], use_parallel: bool) -> Vec<PairScore> {
    use rayon::prelude::*;

    let pairs = pair_indices(view.len());
    if use_parallel {
        pairs
            .into_par_iter()
            .map(|(i, j)| score_pair(view, i, j))
            .collect()
    } else {
        pairs
            .into_iter()
            .map(|(i, j)| score_pair(view, i, j))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn score_pairs(view: &[ViewDocument<'_>], _use_parallel: bool) -> Vec<PairScore> {
    pair_indices(view.len())
        .into_iter()
        .map(|(i, j)| score_pair(view, i, j))
        .collect()
}
