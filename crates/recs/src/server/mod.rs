pub mod error;
pub mod handlers;

pub use error::ApiError;

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::recommendation::HybridRecommender;

/// Application state shared across all handlers
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: HybridRecommender,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    service: String,
    version: String,
    products: usize,
}

/// Health check endpoint
async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "recs-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        products: state.catalog.products().len(),
    })
}

/// Configure application routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health))
            .service(
                web::scope("/products")
                    .route("/{id}/similar", web::get().to(handlers::similar_products))
                    .route(
                        "/{id}/bought-together",
                        web::get().to(handlers::bought_together),
                    ),
            )
            .service(
                web::scope("/users")
                    .route(
                        "/{id}/recommendations",
                        web::get().to(handlers::user_recommendations),
                    )
                    .route("/{id}/collaborative", web::get().to(handlers::collaborative)),
            )
            .route("/evaluate", web::post().to(handlers::evaluate)),
    );
}
