//! Vector primitives over embedding slices.
//!
//! Embeddings are stored as `f32`; products are accumulated in `f64` so the
//! score does not drift with dimensionality.

use crate::error::SimilarityError;

/// Dot product of two equal-length embeddings.
///
/// This is the similarity used across the memory graph. It is only a true
/// cosine similarity when both inputs are unit length, which is the case for
/// embeddings passed through [`l2_normalize_in_place`] upstream. No
/// normalization happens here.
///
/// Fails with [`SimilarityError::LengthMismatch`] before any element is read,
/// and with [`SimilarityError::InvalidElement`] on the first NaN or infinite
/// element found in either vector.
pub fn dot_product(a: &[f32], b: &[f32]) -> Result<f64, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0_f64;
    for (index, (&x, &y)) in a.iter().zip(b.iter()).enumerate() {
        if !x.is_finite() {
            return Err(SimilarityError::InvalidElement { index, value: x });
        }
        if !y.is_finite() {
            return Err(SimilarityError::InvalidElement { index, value: y });
        }
        dot += f64::from(x) * f64::from(y);
    }

    Ok(dot)
}

/// Euclidean length of an embedding.
pub fn l2_norm(v: &[f32]) -> f64 {
    v.iter()
        .map(|&x| f64::from(x) * f64::from(x))
        .sum::<f64>()
        .sqrt()
}

/// In-place L2 normalization so that [`dot_product`] behaves as cosine
/// similarity. Zero vectors are left untouched.
pub fn l2_normalize_in_place(v: &mut [f32]) {
    let norm = l2_norm(v);
    if norm > 0.0 && norm.is_finite() {
        let inv_norm = norm.recip();
        for x in v.iter_mut() {
            *x = (f64::from(*x) * inv_norm) as f32;
        }
    }
}
