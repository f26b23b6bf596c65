use thiserror::Error;

/// Errors raised while scoring a pair of embeddings.
///
/// A missing or empty embedding is never an error: it scores 0 and the pair
/// simply contributes no edge.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimilarityError {
    /// The two embeddings have different dimensionality. Usually means the
    /// documents were embedded by different model versions.
    #[error("vectors must have the same length (left {left}, right {right})")]
    LengthMismatch { left: usize, right: usize },
    /// An element is NaN or infinite.
    #[error("vectors must contain only finite numbers (index {index}: {value})")]
    InvalidElement { index: usize, value: f32 },
}
