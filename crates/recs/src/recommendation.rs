//! Hybrid Recommendation Engine
//!
//! Blends collaborative filtering, content-based similarity, and
//! market-basket associations into a single ranked list.
//!
//! Steps:
//! 1. Collaborative candidates for the user (always)
//! 2. Nearest-neighbour candidates for the target product (if given and known)
//! 3. Co-purchase candidates for the target product (if given)
//! 4. Merge weighted scores per product id, sort, truncate

use crate::catalog::Catalog;
use crate::collaborative::collaborative_filtering;
use crate::config::HybridConfig;
use crate::content_based::find_similar_products;
use crate::market_basket::find_frequently_bought_together;
use crate::types::{rank_order, HybridRecommendation, RecommendationSource};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Scored candidate from a single recommender
#[derive(Debug, Clone)]
struct Candidate {
    product_id: String,
    score: f64,
    source: RecommendationSource,
}

/// Hybrid recommender with configurable weights
#[derive(Debug, Clone, Default)]
pub struct HybridRecommender {
    config: HybridConfig,
}

impl HybridRecommender {
    pub fn new(config: HybridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HybridConfig {
        &self.config
    }

    #[instrument(skip(self, catalog), fields(products = catalog.products().len()))]
    pub fn recommend(
        &self,
        user_id: &str,
        target_product_id: Option<&str>,
        catalog: &Catalog,
        limit: usize,
    ) -> Vec<HybridRecommendation> {
        let pool_size = limit.saturating_mul(self.config.candidate_multiplier);
        let mut candidates = Vec::new();

        let collaborative = collaborative_filtering(
            user_id,
            catalog.purchase_history(),
            catalog.products(),
            pool_size,
        );
        candidates.extend(collaborative.into_iter().map(|rec| Candidate {
            product_id: rec.product_id,
            score: rec.score * self.config.collaborative_weight,
            source: RecommendationSource::Collaborative,
        }));

        if let Some(target_id) = target_product_id {
            match catalog.product(target_id) {
                Some(target) => {
                    let similar = find_similar_products(target, catalog.products(), pool_size);
                    candidates.extend(similar.into_iter().map(|rec| Candidate {
                        product_id: rec.product.id,
                        score: rec.similarity * self.config.content_weight,
                        source: RecommendationSource::ContentBased,
                    }));
                }
                None => debug!(target_id, "Target product not in catalog, skipping similarity"),
            }

            let associations = find_frequently_bought_together(
                catalog.purchase_history(),
                target_id,
                self.config.min_support,
                pool_size,
            );
            candidates.extend(associations.into_iter().map(|assoc| Candidate {
                product_id: assoc.product_id,
                score: assoc.confidence * self.config.market_basket_weight,
                source: RecommendationSource::MarketBasket,
            }));
        }

        debug!(candidates = candidates.len(), "Collected hybrid candidates");

        let mut merged = merge_candidates(candidates);
        merged.sort_by(|a, b| rank_order(a.score, &a.product_id, b.score, &b.product_id));
        merged.truncate(limit);
        merged
    }
}

/// Hybrid recommendations with default weights
pub fn hybrid_recommendation(
    user_id: &str,
    target_product_id: Option<&str>,
    catalog: &Catalog,
    limit: usize,
) -> Vec<HybridRecommendation> {
    HybridRecommender::default().recommend(user_id, target_product_id, catalog, limit)
}

fn merge_candidates(candidates: Vec<Candidate>) -> Vec<HybridRecommendation> {
    let mut merged: HashMap<String, HybridRecommendation> = HashMap::new();

    for candidate in candidates {
        let entry = merged
            .entry(candidate.product_id.clone())
            .or_insert_with(|| HybridRecommendation {
                product_id: candidate.product_id,
                score: 0.0,
                sources: Vec::new(),
            });
        entry.score += candidate.score;
        if !entry.sources.contains(&candidate.source) {
            entry.sources.push(candidate.source);
        }
    }

    merged
        .into_values()
        .map(|mut rec| {
            rec.sources.sort();
            rec
        })
        .collect()
}
