//! Client configuration

/// Configuration for connecting to the catalog service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL (e.g., "http://localhost:3001")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// How long a cached list response stays fresh, in seconds
    pub cache_ttl: u64,
}

impl ClientConfig {
    /// Create a new configuration with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            cache_ttl: 300,
        }
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the cache TTL in seconds (0 disables caching).
    pub fn with_cache_ttl(mut self, cache_ttl: u64) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }
}
