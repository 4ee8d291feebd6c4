//! Client configuration

/// API base URL outside production
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:5000";

/// API base URL in production
pub const PRODUCTION_BASE_URL: &str = "https://api.yourdomain.com";

/// Configuration for [`crate::HttpCatalogApi`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Base URL for the named environment
    pub fn for_environment(environment: &str) -> Self {
        if environment == "production" {
            Self::new(PRODUCTION_BASE_URL)
        } else {
            Self::new(DEVELOPMENT_BASE_URL)
        }
    }

    /// Pick the base URL from `ENVIRONMENT`, falling back to `NODE_ENV`
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT")
            .or_else(|_| std::env::var("NODE_ENV"))
            .unwrap_or_else(|_| "development".into());
        Self::for_environment(&environment)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP API client from this configuration
    pub fn build_http_api(&self) -> crate::ClientResult<crate::HttpCatalogApi> {
        crate::HttpCatalogApi::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEVELOPMENT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_selects_base_url() {
        assert_eq!(
            ClientConfig::for_environment("production").base_url,
            PRODUCTION_BASE_URL
        );
        assert_eq!(
            ClientConfig::for_environment("staging").base_url,
            DEVELOPMENT_BASE_URL
        );
        assert_eq!(ClientConfig::default().timeout, 30);
    }
}
