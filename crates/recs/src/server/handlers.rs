use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::{
    validate_limit, validate_product_id, validate_user_id, StorefrontError, DEFAULT_LIMIT,
};
use tracing::info;

use super::error::ApiError;
use super::AppState;
use crate::collaborative::collaborative_filtering;
use crate::content_based::find_similar_products;
use crate::evaluation::evaluate_recommendations;
use crate::market_basket::find_frequently_bought_together;

/// Query parameters carrying only a result limit
#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Query parameters for co-purchase lookups
#[derive(Debug, Deserialize)]
pub struct BoughtTogetherQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Minimum co-purchase count (default: configured min_support)
    pub min_support: Option<usize>,
}

/// Query parameters for hybrid recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Product the user is currently viewing
    pub product_id: Option<String>,
}

/// Request body for offline evaluation
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub recommendations: Vec<String>,
    pub actual_purchases: Vec<String>,
}

/// List response envelope
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub count: usize,
    pub generated_at: DateTime<Utc>,
}

impl<T> ListResponse<T> {
    fn new(items: Vec<T>) -> Self {
        Self {
            count: items.len(),
            items,
            generated_at: Utc::now(),
        }
    }
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// GET /api/v1/products/{id}/similar - Nearest neighbours by feature similarity
pub async fn similar_products(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<LimitQuery>,
) -> Result<HttpResponse, ApiError> {
    let product_id = path.into_inner();
    validate_product_id(&product_id)?;
    validate_limit(params.limit)?;

    let target = state
        .catalog
        .product(&product_id)
        .ok_or_else(|| StorefrontError::not_found("Product", &product_id))?;

    let items = find_similar_products(target, state.catalog.products(), params.limit);
    info!(product_id = %product_id, returned = items.len(), "Served similar products");

    Ok(HttpResponse::Ok().json(ListResponse::new(items)))
}

/// GET /api/v1/products/{id}/bought-together - Co-purchase associations
pub async fn bought_together(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<BoughtTogetherQuery>,
) -> Result<HttpResponse, ApiError> {
    let product_id = path.into_inner();
    validate_product_id(&product_id)?;
    validate_limit(params.limit)?;

    if state.catalog.product(&product_id).is_none() {
        return Err(StorefrontError::not_found("Product", &product_id).into());
    }

    let min_support = params
        .min_support
        .unwrap_or(state.recommender.config().min_support);
    if min_support == 0 {
        return Err(StorefrontError::validation_field(
            "min_support must be at least 1",
            "min_support",
        )
        .into());
    }

    let items = find_frequently_bought_together(
        state.catalog.purchase_history(),
        &product_id,
        min_support,
        params.limit,
    );
    info!(product_id = %product_id, returned = items.len(), "Served bought-together");

    Ok(HttpResponse::Ok().json(ListResponse::new(items)))
}

/// GET /api/v1/users/{id}/recommendations - Hybrid recommendations
pub async fn user_recommendations(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<RecommendationQuery>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    validate_user_id(&user_id)?;
    validate_limit(params.limit)?;
    if let Some(product_id) = &params.product_id {
        validate_product_id(product_id)?;
    }

    let items = state.recommender.recommend(
        &user_id,
        params.product_id.as_deref(),
        &state.catalog,
        params.limit,
    );
    info!(user_id = %user_id, returned = items.len(), "Served hybrid recommendations");

    Ok(HttpResponse::Ok().json(ListResponse::new(items)))
}

/// GET /api/v1/users/{id}/collaborative - Collaborative filtering only
pub async fn collaborative(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<LimitQuery>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    validate_user_id(&user_id)?;
    validate_limit(params.limit)?;

    let items = collaborative_filtering(
        &user_id,
        state.catalog.purchase_history(),
        state.catalog.products(),
        params.limit,
    );

    Ok(HttpResponse::Ok().json(ListResponse::new(items)))
}

/// POST /api/v1/evaluate - Precision, recall, and F1 for a recommendation list
pub async fn evaluate(body: web::Json<EvaluateRequest>) -> Result<HttpResponse, ApiError> {
    let metrics = evaluate_recommendations(&body.recommendations, &body.actual_purchases);
    Ok(HttpResponse::Ok().json(metrics))
}
