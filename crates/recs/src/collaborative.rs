//! User-based collaborative filtering
//!
//! Finds users whose baskets overlap with the target user's basket (Jaccard
//! similarity) and recommends what those neighbours bought.

use crate::similarity::jaccard_similarity;
use crate::types::{rank_order, Product, PurchaseHistory, ScoredProduct};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, instrument};

/// Neighbours must be strictly more similar than this
pub const SIMILARITY_THRESHOLD: f64 = 0.1;

/// Uniform score assigned to catalog products when the user has no history
pub const COLD_START_SCORE: f64 = 0.1;

/// Recommend products for `user_id` from similar users' purchases
///
/// Users without purchases get the first `limit` catalog products at
/// [`COLD_START_SCORE`]. Otherwise every neighbour above
/// [`SIMILARITY_THRESHOLD`] adds its similarity to each product in its
/// basket that the user does not already own (once per neighbour).
#[instrument(skip(purchase_history, products), fields(users = purchase_history.user_count()))]
pub fn collaborative_filtering(
    user_id: &str,
    purchase_history: &PurchaseHistory,
    products: &[Product],
    limit: usize,
) -> Vec<ScoredProduct> {
    let owned: BTreeSet<&str> = match purchase_history.basket(user_id) {
        Some(basket) if !basket.is_empty() => basket.iter().map(String::as_str).collect(),
        _ => {
            debug!("No purchase history, using cold start fallback");
            return cold_start(products, limit);
        }
    };

    let mut scores: HashMap<&str, f64> = HashMap::new();
    let mut neighbours = 0usize;

    for (other_user, basket) in purchase_history.iter() {
        if other_user == user_id {
            continue;
        }

        let other: BTreeSet<&str> = basket.iter().map(String::as_str).collect();
        let similarity = jaccard_similarity(owned.iter().copied(), other.iter().copied());
        if similarity <= SIMILARITY_THRESHOLD {
            continue;
        }
        neighbours += 1;

        for product_id in other.difference(&owned) {
            *scores.entry(*product_id).or_insert(0.0) += similarity;
        }
    }

    let mut recommendations: Vec<ScoredProduct> = scores
        .into_iter()
        .map(|(product_id, score)| ScoredProduct {
            product_id: product_id.to_string(),
            score,
        })
        .collect();

    recommendations.sort_by(|a, b| rank_order(a.score, &a.product_id, b.score, &b.product_id));
    recommendations.truncate(limit);

    debug!(
        neighbours,
        returned = recommendations.len(),
        "Computed collaborative recommendations"
    );
    recommendations
}

fn cold_start(products: &[Product], limit: usize) -> Vec<ScoredProduct> {
    products
        .iter()
        .take(limit)
        .map(|product| ScoredProduct {
            product_id: product.id.clone(),
            score: COLD_START_SCORE,
        })
        .collect()
}
