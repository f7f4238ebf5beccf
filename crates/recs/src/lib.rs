//! Storefront Recommendation Engine
//!
//! Stateless product recommenders over an in-memory catalog: feature
//! similarity, user-based collaborative filtering, market-basket analysis,
//! a weighted hybrid of the three, and offline evaluation.

pub mod catalog;
pub mod collaborative;
pub mod config;
pub mod content_based;
pub mod evaluation;
pub mod market_basket;
pub mod recommendation;
pub mod server;
pub mod similarity;
pub mod types;

// Re-export key types
pub use catalog::Catalog;
pub use collaborative::{collaborative_filtering, COLD_START_SCORE, SIMILARITY_THRESHOLD};
pub use config::{HybridConfig, RecsConfig};
pub use content_based::find_similar_products;
pub use evaluation::evaluate_recommendations;
pub use market_basket::find_frequently_bought_together;
pub use recommendation::{hybrid_recommendation, HybridRecommender};
pub use similarity::{
    category_similarity, cosine_similarity, jaccard_similarity, product_similarity,
};
pub use types::*;

#[cfg(test)]
mod tests;
