//! Similarity scoring between documents and memories.

use crate::error::SimilarityError;
use crate::vector::dot_product;

/// Score used for a document-memory link when neither embeddings nor a
/// relevance score are available.
pub const DEFAULT_DOCUMENT_MEMORY_SIMILARITY: f64 = 0.5;

/// Semantic similarity between two document embeddings.
///
/// Returns 0 when either embedding is absent or empty. Otherwise the raw
/// [`dot_product`] floored at 0; positive values are passed through without
/// rescaling. Length mismatches and non-finite elements propagate.
pub fn semantic_similarity(
    a: Option<&[f32]>,
    b: Option<&[f32]>,
) -> Result<f64, SimilarityError> {
    match (a, b) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => {
            let similarity = dot_product(a, b)?;
            Ok(if similarity >= 0.0 { similarity } else { 0.0 })
        }
        _ => Ok(0.0),
    }
}

/// Similarity between a document and one of its memory entries.
///
/// Embeddings win when both are present. Without them, `relevance_score`
/// (stored on a 0-100 scale) is mapped into `[0, 1]`. With neither, the link
/// gets [`DEFAULT_DOCUMENT_MEMORY_SIMILARITY`].
pub fn document_memory_similarity(
    document: Option<&[f32]>,
    memory: Option<&[f32]>,
    relevance_score: Option<f64>,
) -> Result<f64, SimilarityError> {
    let has_embeddings = matches!(
        (document, memory),
        (Some(d), Some(m)) if !d.is_empty() && !m.is_empty()
    );
    if has_embeddings {
        return semantic_similarity(document, memory);
    }

    match relevance_score {
        Some(score) if !score.is_nan() => Ok((score / 100.0).clamp(0.0, 1.0)),
        _ => Ok(DEFAULT_DOCUMENT_MEMORY_SIMILARITY),
    }
}
