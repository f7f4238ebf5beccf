//! Content-based filtering
//!
//! Nearest-neighbour search over product feature vectors.

use crate::similarity::cosine_similarity;
use crate::types::{rank_order, Product, SimilarProduct};
use tracing::{debug, instrument};

/// Find the products most similar to `target`
///
/// Every product other than the target (matched by id) is scored by cosine
/// similarity of numeric features. Results are sorted by similarity
/// descending, ties broken by ascending id, and truncated to `limit`.
#[instrument(
    skip(target, all_products),
    fields(target_id = %target.id, catalog_size = all_products.len())
)]
pub fn find_similar_products(
    target: &Product,
    all_products: &[Product],
    limit: usize,
) -> Vec<SimilarProduct> {
    let target_features = target.features();

    let mut results: Vec<SimilarProduct> = all_products
        .iter()
        .filter(|product| product.id != target.id)
        .map(|product| SimilarProduct {
            similarity: cosine_similarity(&target_features, &product.features()),
            product: product.clone(),
        })
        .collect();

    results.sort_by(|a, b| rank_order(a.similarity, &a.product.id, b.similarity, &b.product.id));
    results.truncate(limit);

    debug!(returned = results.len(), "Computed similar products");
    results
}
