//! Core types for the recommendation engine

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Numeric product features keyed by attribute name
pub type FeatureVector = BTreeMap<String, f64>;

/// Attribute holding a product's category list
pub const CATEGORIES_ATTRIBUTE: &str = "categories";

/// Catalog product
///
/// Attributes are open-ended: numeric values (price, rating, weight, ...)
/// form the feature vector, everything else is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Numeric attributes as a feature vector
    pub fn features(&self) -> FeatureVector {
        self.attributes
            .iter()
            .filter_map(|(name, value)| value.as_f64().map(|v| (name.clone(), v)))
            .collect()
    }

    /// Category set (string entries of the `categories` array)
    pub fn categories(&self) -> BTreeSet<&str> {
        self.attributes
            .get(CATEGORIES_ATTRIBUTE)
            .and_then(Value::as_array)
            .map(|values| values.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Purchase history: user id to ordered basket of product ids
///
/// Baskets may repeat ids or be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseHistory(BTreeMap<String, Vec<String>>);

impl PurchaseHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append purchases to a user's basket
    pub fn record<I, S>(&mut self, user_id: impl Into<String>, product_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .entry(user_id.into())
            .or_default()
            .extend(product_ids.into_iter().map(Into::into));
    }

    pub fn basket(&self, user_id: &str) -> Option<&[String]> {
        self.0.get(user_id).map(Vec::as_slice)
    }

    /// Iterate (user id, basket) pairs in user id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(user, basket)| (user.as_str(), basket.as_slice()))
    }

    /// Iterate baskets as transactions
    pub fn transactions(&self) -> impl Iterator<Item = &[String]> {
        self.0.values().map(Vec::as_slice)
    }

    pub fn user_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<U, I, S> FromIterator<(U, I)> for PurchaseHistory
where
    U: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (U, I)>>(iter: T) -> Self {
        let mut history = PurchaseHistory::new();
        for (user, products) in iter {
            history.record(user, products);
        }
        history
    }
}

/// Product id with a ranking score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProduct {
    pub product_id: String,
    pub score: f64,
}

/// Product returned by nearest-neighbour search, flattened with its similarity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarProduct {
    #[serde(flatten)]
    pub product: Product,
    pub similarity: f64,
}

/// Co-purchase association for a target product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Association {
    pub product_id: String,
    /// Number of transactions containing both products
    pub frequency: usize,
    /// frequency / number of transactions containing the target
    pub confidence: f64,
}

/// Recommender that contributed to a hybrid score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Collaborative,
    ContentBased,
    MarketBasket,
}

/// Merged hybrid recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridRecommendation {
    pub product_id: String,
    pub score: f64,
    pub sources: Vec<RecommendationSource>,
}

/// Offline evaluation metrics, each in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

/// Descending score, then ascending id
pub(crate) fn rank_order(a_score: f64, a_id: &str, b_score: f64, b_id: &str) -> Ordering {
    b_score.total_cmp(&a_score).then_with(|| a_id.cmp(b_id))
}
