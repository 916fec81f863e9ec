//! Configuration for the analysis-service client and CLI.

use std::time::Duration;

/// Service configuration constants.
pub mod service {
    use std::time::Duration;

    /// Default base URL for the analysis service.
    pub const BASE_URL: &str = "http://localhost:8000";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default delay between job polls. Cadence is a caller choice; this is
    /// only the CLI default.
    pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

    /// Snapshot cache TTL. Profiles change slowly; an hour keeps repeated
    /// comparisons of the same author off the service.
    pub const CACHE_TTL: Duration = Duration::from_secs(3600);

    /// Maximum cached snapshots.
    pub const CACHE_MAX_SIZE: u64 = 100;
}

/// Engine presentation defaults.
pub mod defaults {
    /// Venues shown in the top-venues filter.
    pub const TOP_VENUES: usize = 5;

    /// Keywords taken from each author in a comparison.
    pub const TOP_KEYWORDS_EACH: usize = 10;

    /// Minimum keyword weight for the cloud.
    pub const KEYWORD_WEIGHT_MIN: f64 = 12.0;

    /// Maximum keyword weight for the cloud.
    pub const KEYWORD_WEIGHT_MAX: f64 = 32.0;
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Analysis service API key (optional).
    pub api_key: Option<String>,

    /// Base URL of the analysis service.
    pub base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Default poll interval for job completion.
    pub poll_interval: Duration,

    /// Snapshot cache TTL.
    pub cache_ttl: Duration,

    /// Maximum snapshot cache size.
    pub cache_max_size: u64,
}

impl Config {
    /// Create a new configuration with an optional API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: service::BASE_URL.to_string(),
            request_timeout: service::REQUEST_TIMEOUT,
            connect_timeout: service::CONNECT_TIMEOUT,
            poll_interval: service::POLL_INTERVAL,
            cache_ttl: service::CACHE_TTL,
            cache_max_size: service::CACHE_MAX_SIZE,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            base_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            poll_interval: Duration::from_millis(0), // No delay in tests
            cache_ttl: Duration::from_secs(0),       // No caching in tests
            cache_max_size: 0,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("SCHOLAR_COMPARE_API_KEY").ok();
        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("SCHOLAR_COMPARE_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
