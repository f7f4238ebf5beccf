//! Similarity measures
//!
//! Cosine similarity over sparse named feature vectors and Jaccard
//! similarity over sets.

use crate::types::{FeatureVector, Product};
use std::collections::HashSet;
use std::hash::Hash;

/// Cosine similarity between two feature vectors
///
/// Keys missing from one side count as 0. Returns 0 when either vector has
/// zero norm. The result lies in [0, 1] for non-negative features and can be
/// negative when features are signed.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> f64 {
    // Cosine is scale invariant, so each side is divided by its largest
    // magnitude to keep the squared norms finite.
    let scale_a = max_magnitude(a);
    let scale_b = max_magnitude(b);
    if scale_a == 0.0 || scale_b == 0.0 || !scale_a.is_finite() || !scale_b.is_finite() {
        return 0.0;
    }

    let dot_product = a
        .iter()
        .filter_map(|(key, x)| b.get(key).map(|y| (x / scale_a) * (y / scale_b)))
        .fold(0.0, |acc, v| acc + v);
    let norm_a = scaled_norm(a, scale_a);
    let norm_b = scaled_norm(b, scale_b);

    let similarity = dot_product / (norm_a * norm_b);
    if similarity.is_finite() {
        // Disjoint keys must score +0.0 so ties sort by id
        similarity + 0.0
    } else {
        0.0
    }
}

fn max_magnitude(v: &FeatureVector) -> f64 {
    v.values().fold(0.0_f64, |max, x| max.max(x.abs()))
}

fn scaled_norm(v: &FeatureVector, scale: f64) -> f64 {
    v.values()
        .map(|x| (x / scale) * (x / scale))
        .fold(0.0, |acc, sq| acc + sq)
        .sqrt()
}

/// Cosine similarity between the numeric features of two products
pub fn product_similarity(a: &Product, b: &Product) -> f64 {
    cosine_similarity(&a.features(), &b.features())
}

/// Jaccard similarity |A ∩ B| / |A ∪ B|
///
/// Inputs are de-duplicated first. Returns 0 when both are empty.
pub fn jaccard_similarity<T, A, B>(a: A, b: B) -> f64
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let set_a: HashSet<T> = a.into_iter().collect();
    let set_b: HashSet<T> = b.into_iter().collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();

    intersection as f64 / union as f64
}

/// Jaccard similarity of two products' category sets
pub fn category_similarity(a: &Product, b: &Product) -> f64 {
    jaccard_similarity(a.categories(), b.categories())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(pairs: &[(&str, f64)]) -> FeatureVector {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_cosine_identical_and_zero() {
        let a = features(&[("price", 10.0), ("rating", 5.0)]);
        let b = features(&[("price", 10.0), ("rating", 5.0)]);
        let c = features(&[("price", 0.0), ("rating", 0.0)]);

        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-12);
        assert_eq!(cosine_similarity(&a, &c), 0.0);
    }

    #[test]
    fn test_cosine_missing_keys_count_as_zero() {
        let a = features(&[("price", 1.0)]);
        let b = features(&[("weight", 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);

        let c = features(&[("price", 1.0), ("weight", 1.0)]);
        let sim = cosine_similarity(&a, &c);
        assert!((sim - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_signed_features_can_be_negative() {
        let a = features(&[("x", 1.0)]);
        let b = features(&[("x", -2.0)]);
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_disjoint_keys_is_positive_zero() {
        let a = features(&[("price", 1.0)]);
        let b = features(&[("weight", 1.0)]);
        let sim = cosine_similarity(&a, &b);
        assert_eq!(sim, 0.0);
        assert!(sim.is_sign_positive());
    }

    #[test]
    fn test_cosine_large_magnitudes() {
        let a = features(&[("price", 1e200), ("rating", 3e199)]);
        let b = features(&[("price", 1e200)]);
        let c = features(&[("price", 1e-200)]);

        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-12);
        assert!(cosine_similarity(&a, &b).is_finite());
        assert!((cosine_similarity(&b, &c) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_jaccard() {
        assert_eq!(jaccard_similarity(["a", "b"], ["a", "b"]), 1.0);
        assert_eq!(jaccard_similarity(["a"], ["b"]), 0.0);
        let sim = jaccard_similarity(["action", "comedy"], ["action", "drama"]);
        assert!((sim - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_jaccard_deduplicates_and_handles_empty() {
        assert_eq!(jaccard_similarity(["a", "a", "b"], ["b", "a"]), 1.0);
        assert_eq!(jaccard_similarity(Vec::<&str>::new(), Vec::<&str>::new()), 0.0);
    }

    #[test]
    fn test_category_similarity() {
        let a = Product::new("a").with_attribute("categories", vec!["audio", "wireless"]);
        let b = Product::new("b").with_attribute("categories", vec!["audio"]);
        let c = Product::new("c").with_attribute("price", 3.0);

        assert_eq!(category_similarity(&a, &b), 0.5);
        assert_eq!(category_similarity(&a, &c), 0.0);
    }
}
