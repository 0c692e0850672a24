//! Vector similarity math used for correction ranking.
//!
//! All functions are tolerant of mismatched vector lengths: the dot product
//! runs over the shared prefix rather than failing, so dimensionality drift
//! between embedding model versions degrades scores instead of aborting
//! requests.

/// Dot product over the shared prefix of two vectors.
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(&x, &y)| x * y).sum()
}

/// Euclidean norm of a vector.
pub fn magnitude(v: &[f32]) -> f32 {
    v.iter().map(|&x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity between two vectors, in [-1, 1].
///
/// A zero vector is treated as maximally dissimilar (similarity 0) rather
/// than undefined.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let a_norm = magnitude(a);
    let b_norm = magnitude(b);

    if a_norm == 0.0 || b_norm == 0.0 {
        return 0.0;
    }

    dot(a, b) / (a_norm * b_norm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_uses_shared_prefix() {
        // Lengths differ; the trailing element of the longer vector is ignored
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0]), 14.0);
        assert_eq!(dot(&[], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(magnitude(&[3.0, 4.0]), 5.0);
        assert_eq!(magnitude(&[]), 0.0);
    }

    #[test]
    fn test_self_similarity_is_one() {
        let v = vec![0.3, -1.2, 4.5, 0.01];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_similarity_is_zero() {
        let v = vec![1.0, 2.0, 3.0];
        let zero = vec![0.0, 0.0, 0.0];
        assert_eq!(cosine_similarity(&v, &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &v), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn test_orthogonal_and_opposite_vectors() {
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_scale_invariance() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![2.0, 4.0, 6.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-6);
    }
}
