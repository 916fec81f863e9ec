//! Error types for the analysis-service boundary.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. The analytics engine itself has no error type: its
//! functions are total and degrade malformed fields to documented defaults.

use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Rate limited by the analysis service (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from the service
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Server { .. })
    }

    /// Get the retry-after duration if this is a rate limit error.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

/// Errors from the analysis-job workflow.
#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    /// Error from the HTTP client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// The profile URL is not a recognizable scholar profile
    #[error("Invalid profile URL: {url}")]
    InvalidProfileUrl {
        /// The rejected URL
        url: String,
    },

    /// The analysis job reached the failed state
    #[error("Analysis job failed: {message}")]
    JobFailed {
        /// Failure message reported by the service
        message: String,
    },

    /// A completed job arrived without a snapshot payload
    #[error("Job {job_id} completed without a result")]
    MissingResult {
        /// Job identifier
        job_id: String,
    },
}

impl ServiceError {
    /// Create an invalid-profile-URL error.
    #[must_use]
    pub fn invalid_profile_url(url: impl Into<String>) -> Self {
        Self::InvalidProfileUrl { url: url.into() }
    }

    /// Create a job-failed error.
    #[must_use]
    pub fn job_failed(message: impl Into<String>) -> Self {
        Self::JobFailed { message: message.into() }
    }

    /// Convert to a user-facing message for the terminal failed state.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::RateLimited { retry_after }) => {
                format!("The analysis service is rate limiting us. Wait {retry_after:?} and retry.")
            }
            Self::InvalidProfileUrl { url } => {
                format!("'{url}' does not look like a Google Scholar profile URL.")
            }
            Self::JobFailed { message } => format!("Analysis failed: {message}"),
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for job-workflow operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
