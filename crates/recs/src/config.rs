use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use storefront_core::{validate_weight, LogConfig, LogFormat, StorefrontError};

/// Recommendation service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecsConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Catalog data source
    pub catalog: CatalogConfig,

    /// Hybrid blending configuration
    #[serde(default)]
    pub hybrid: HybridConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (default: 8083)
    pub port: u16,

    /// Worker threads
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// JSON file with `products` and `purchase_history`; empty catalog if unset
    pub path: Option<PathBuf>,
}

/// Weights and candidate sizes for the hybrid combiner
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct HybridConfig {
    /// Collaborative filtering weight (default: 0.4)
    pub collaborative_weight: f64,

    /// Content-based (nearest neighbour) weight (default: 0.3)
    pub content_weight: f64,

    /// Market-basket weight (default: 0.3)
    pub market_basket_weight: f64,

    /// Each recommender is asked for `limit * candidate_multiplier` candidates
    pub candidate_multiplier: usize,

    /// Minimum co-purchase frequency for market-basket candidates
    pub min_support: usize,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            collaborative_weight: 0.4,
            content_weight: 0.3,
            market_basket_weight: 0.3,
            candidate_multiplier: 2,
            min_support: 1,
        }
    }
}

impl HybridConfig {
    pub fn validate(&self) -> Result<(), StorefrontError> {
        for (name, value) in [
            ("collaborative_weight", self.collaborative_weight),
            ("content_weight", self.content_weight),
            ("market_basket_weight", self.market_basket_weight),
        ] {
            validate_weight(name, value).map_err(|e| StorefrontError::ConfigurationError {
                message: e.to_string(),
                key: Some(format!("RECS__HYBRID__{}", name.to_uppercase())),
            })?;
        }

        if self.candidate_multiplier == 0 {
            return Err(StorefrontError::ConfigurationError {
                message: "candidate_multiplier must be greater than 0".to_string(),
                key: Some("RECS__HYBRID__CANDIDATE_MULTIPLIER".to_string()),
            });
        }
        if self.min_support == 0 {
            return Err(StorefrontError::ConfigurationError {
                message: "min_support must be greater than 0".to_string(),
                key: Some("RECS__HYBRID__MIN_SUPPORT".to_string()),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// "json" or "pretty"
    pub format: LogFormat,

    /// Default filter directive
    pub level: String,
}

impl LoggingConfig {
    pub fn to_log_config(&self, service_name: &str) -> LogConfig {
        LogConfig {
            format: self.format,
            level: self.level.clone(),
            service_name: service_name.to_string(),
        }
    }
}

impl Default for RecsConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8083,
                workers: None,
            },
            catalog: CatalogConfig { path: None },
            hybrid: HybridConfig::default(),
            logging: LoggingConfig {
                format: LogFormat::Json,
                level: "info".to_string(),
            },
        }
    }
}

impl RecsConfig {
    /// Load configuration from defaults, config file and environment
    ///
    /// Environment keys use the `RECS` prefix with `__` between sections,
    /// e.g. `RECS__SERVER__PORT=9000`.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(config::File::with_name("config/recs").required(false), "RECS")
    }

    /// Load configuration layering `file` and `env_prefix` variables over defaults
    pub fn load_from<F>(file: F, env_prefix: &str) -> anyhow::Result<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let defaults = config::Config::try_from(&RecsConfig::default())?;
        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(config::Environment::with_prefix(env_prefix).separator("__"))
            .build()?;

        let config: RecsConfig = settings.try_deserialize()?;
        config.hybrid.validate()?;
        Ok(config)
    }
}
