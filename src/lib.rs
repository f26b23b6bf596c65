//! # memgraph
//!
//! Semantic similarity and connection weighting for the memory graph.
//!
//! Documents carry summary embeddings produced by an external model. This
//! crate scores pairs of embeddings, turns scores into rendering weights
//! (opacity, thickness, glow, pulse period, HSL color) and assembles the
//! edge list the force-directed graph view consumes.
//!
//! ## Contract
//!
//! - Scoring and visual mapping are pure functions: no I/O, no shared
//!   mutable state, safe to call from any thread.
//! - [`semantic_similarity`] is a raw dot product floored at 0. It equals
//!   cosine similarity only for unit-length embeddings; use
//!   [`l2_normalize_in_place`] upstream when that matters.
//! - A missing or empty embedding scores 0. Mismatched dimensions and
//!   non-finite elements are errors ([`SimilarityError`]); the edge builder
//!   logs and skips such pairs.
//!
//! ## Example Usage
//!
//! ```
//! use memgraph::{connection_color, connection_visual_props, semantic_similarity};
//!
//! let a = [0.6_f32, 0.8];
//! let b = [0.8_f32, 0.6];
//! let score = semantic_similarity(Some(&a), Some(&b)).unwrap();
//! assert!((score - 0.96).abs() < 1e-6);
//!
//! let props = connection_visual_props(score);
//! assert!(props.thickness > 3.0);
//! assert_eq!(connection_color(0.0, 220), "hsl(220, 60%, 40%)");
//! ```
pub mod config;
pub mod error;
pub mod graph;
pub mod metrics;
mod serde_null;
pub mod similarity;
pub mod vector;
pub mod visual;

pub use crate::config::{ConfigLoadError, EdgeConfig, GraphConfig};
pub use crate::error::SimilarityError;
pub use crate::graph::{
    build_graph_edges, build_graph_edges_from_json, EdgeBuildReport, EdgeType, GraphDocument,
    GraphEdge, GraphEdges, GraphMemory, MemoryRelation, RelationType, ALL_SPACES, DEFAULT_SPACE,
    VERSION_VISUAL_PROPS,
};
pub use crate::metrics::{set_graph_metrics, GraphMetrics};
pub use crate::similarity::{
    document_memory_similarity, semantic_similarity, DEFAULT_DOCUMENT_MEMORY_SIMILARITY,
};
pub use crate::vector::{dot_product, l2_norm, l2_normalize_in_place};
pub use crate::visual::{
    connection_color, connection_color_default, connection_visual_props, ConnectionVisualProps,
    DEFAULT_CONNECTION_HUE,
};

/// Entry point used by the graph renderer: similarity of two optional
/// embeddings. Alias of [`semantic_similarity`].
pub fn similarity(a: Option<&[f32]>, b: Option<&[f32]>) -> Result<f64, SimilarityError> {
    semantic_similarity(a, b)
}
