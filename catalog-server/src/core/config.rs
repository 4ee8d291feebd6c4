use std::time::Duration;

use crate::services::catalog_service::CacheSettings;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PORT | 5000 | HTTP listen port |
/// | ENVIRONMENT (fallback NODE_ENV) | development | runtime environment |
/// | LOG_LEVEL | info | log level when RUST_LOG is unset |
/// | LOG_DIR | - | directory for daily rolling log files |
/// | PRODUCT_CACHE_TTL_SECS | 300 | product listing cache TTL |
/// | CATEGORY_CACHE_TTL_SECS | 86400 | category cache TTL |
/// | PRODUCT_CACHE_CAPACITY | 64 | cached product listings |
///
/// Unparseable numbers fall back to their defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub product_cache_ttl_secs: u64,
    pub category_cache_ttl_secs: u64,
    pub product_cache_capacity: usize,
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            http_port: env_parse("PORT", 5000),
            environment: std::env::var("ENVIRONMENT")
                .or_else(|_| std::env::var("NODE_ENV"))
                .unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            product_cache_ttl_secs: env_parse("PRODUCT_CACHE_TTL_SECS", 300),
            category_cache_ttl_secs: env_parse("CATEGORY_CACHE_TTL_SECS", 86_400),
            product_cache_capacity: env_parse("PRODUCT_CACHE_CAPACITY", 64),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn cache_settings(&self) -> CacheSettings {
        CacheSettings {
            product_ttl: Duration::from_secs(self.product_cache_ttl_secs),
            product_capacity: self.product_cache_capacity,
            category_ttl: Duration::from_secs(self.category_cache_ttl_secs),
        }
    }
}

impl Default for Config {
    /// Built-in defaults, ignoring the environment
    fn default() -> Self {
        Self {
            http_port: 5000,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            product_cache_ttl_secs: 300,
            category_cache_ttl_secs: 86_400,
            product_cache_capacity: 64,
        }
    }
}
