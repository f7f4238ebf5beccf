//! Recommendation Service - Product recommendations for the storefront
//!
//! Port: 8083

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use storefront_core::init_logging;
use storefront_recs::server::{self, AppState};
use storefront_recs::{Catalog, HybridRecommender, RecsConfig};
use tracing::{info, warn};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = RecsConfig::load().context("Failed to load configuration")?;
    init_logging(&config.logging.to_log_config("recs-service"))?;

    let catalog = match &config.catalog.path {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => {
            warn!("No catalog path configured, serving an empty catalog");
            Catalog::default()
        }
    };

    let state = web::Data::new(AppState {
        catalog: Arc::new(catalog),
        recommender: HybridRecommender::new(config.hybrid),
    });

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Recommendation Service listening on {}", bind_addr);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(server::configure_routes)
            .wrap(actix_web::middleware::Logger::default())
    });
    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server.bind(&bind_addr)?.run().await?;

    Ok(())
}
