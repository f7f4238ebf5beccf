//! Market-basket analysis ("frequently bought together")

use crate::types::{rank_order, Association, PurchaseHistory};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, instrument};

/// Products co-purchased with `target_product_id`
///
/// Only transactions containing the target are considered. `frequency`
/// counts those transactions that also contain the product (once per
/// transaction); entries below `min_support` are dropped. `confidence` is
/// frequency divided by the number of transactions containing the target.
/// Sorted by frequency descending, ties by ascending id.
#[instrument(skip(purchase_history))]
pub fn find_frequently_bought_together(
    purchase_history: &PurchaseHistory,
    target_product_id: &str,
    min_support: usize,
    limit: usize,
) -> Vec<Association> {
    let mut relevant_transactions = 0usize;
    let mut frequencies: HashMap<&str, usize> = HashMap::new();

    for transaction in purchase_history.transactions() {
        let items: BTreeSet<&str> = transaction.iter().map(String::as_str).collect();
        if !items.contains(target_product_id) {
            continue;
        }
        relevant_transactions += 1;

        for product_id in items.into_iter().filter(|id| *id != target_product_id) {
            *frequencies.entry(product_id).or_insert(0) += 1;
        }
    }

    if relevant_transactions == 0 {
        return Vec::new();
    }

    let mut associations: Vec<Association> = frequencies
        .into_iter()
        .filter(|(_, frequency)| *frequency >= min_support)
        .map(|(product_id, frequency)| Association {
            product_id: product_id.to_string(),
            frequency,
            confidence: frequency as f64 / relevant_transactions as f64,
        })
        .collect();

    associations.sort_by(|a, b| {
        rank_order(
            a.frequency as f64,
            &a.product_id,
            b.frequency as f64,
            &b.product_id,
        )
    });
    associations.truncate(limit);

    debug!(
        relevant_transactions,
        returned = associations.len(),
        "Computed co-purchase associations"
    );
    associations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> PurchaseHistory {
        vec![
            ("u1", vec!["phone", "case", "charger"]),
            ("u2", vec!["phone", "case"]),
            ("u3", vec!["phone", "headphones", "case", "case"]),
            ("u4", vec!["laptop", "mouse"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_counts_and_confidence() {
        let results = find_frequently_bought_together(&history(), "phone", 1, 10);

        assert_eq!(results[0].product_id, "case");
        assert_eq!(results[0].frequency, 3);
        assert!((results[0].confidence - 1.0).abs() < 1e-12);

        let ids: Vec<_> = results.iter().map(|a| a.product_id.as_str()).collect();
        assert_eq!(ids, vec!["case", "charger", "headphones"]);
        assert!((results[1].confidence - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_min_support_filters() {
        let results = find_frequently_bought_together(&history(), "phone", 2, 10);
        assert_eq!(results.len(), 1);
        assert!(results.iter().all(|a| a.frequency >= 2));
    }

    #[test]
    fn test_never_returns_target() {
        let results = find_frequently_bought_together(&history(), "case", 1, 10);
        assert!(results.iter().all(|a| a.product_id != "case"));
        assert_eq!(results[0].product_id, "phone");
    }

    #[test]
    fn test_unknown_target_is_empty() {
        assert!(find_frequently_bought_together(&history(), "tablet", 1, 10).is_empty());
    }

    #[test]
    fn test_limit() {
        let results = find_frequently_bought_together(&history(), "phone", 1, 2);
        assert_eq!(results.len(), 2);
    }
}
