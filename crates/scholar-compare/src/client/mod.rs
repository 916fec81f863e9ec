//! Analysis service client.
//!
//! Talks to the external service that scrapes a scholar profile and computes
//! the primary metrics. Provides:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff
//! - Completed-snapshot caching keyed by profile URL
//! - Job start/poll per the service's asynchronous protocol

use std::time::Duration;

use moka::future::Cache;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::Config;
use crate::error::{ClientError, ClientResult, ServiceError, ServiceResult};
use crate::models::{AuthorSnapshot, JobPoll, JobState, StartedJob};

/// Extract the author id from a Google Scholar profile URL.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidProfileUrl`] when the URL does not parse,
/// is not a scholar profile host, or has no `user` query parameter.
pub fn extract_author_id(profile_url: &str) -> ServiceResult<String> {
    let parsed = url::Url::parse(profile_url)
        .map_err(|_| ServiceError::invalid_profile_url(profile_url))?;

    let is_scholar_host =
        parsed.host_str().is_some_and(|host| host.contains("scholar.google"));
    if !is_scholar_host {
        return Err(ServiceError::invalid_profile_url(profile_url));
    }

    parsed
        .query_pairs()
        .find(|(key, _)| key == "user")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ServiceError::invalid_profile_url(profile_url))
}

/// Client for the profile analysis service.
#[derive(Clone)]
pub struct AnalysisClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Completed-snapshot cache, keyed by profile URL digest.
    snapshots: Cache<String, AuthorSnapshot>,

    /// API key (optional).
    api_key: Option<String>,

    /// Service base URL.
    base_url: String,

    /// Default poll interval for [`Self::fetch_snapshot`].
    poll_interval: Duration,
}

impl AnalysisClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            "application/json".parse().expect("valid content-type header"),
        );

        if let Some(ref key) = config.api_key {
            headers.insert("x-api-key", key.parse()?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
            .build_with_max_retries(3);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let snapshots = Cache::builder()
            .max_capacity(config.cache_max_size)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            client,
            snapshots,
            api_key: config.api_key,
            base_url: config.base_url,
            poll_interval: config.poll_interval,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Start an analysis job for a profile URL.
    ///
    /// # Errors
    ///
    /// Returns error when the URL is not a scholar profile or the service
    /// rejects the request.
    pub async fn start_analysis(
        &self,
        profile_url: &str,
        force_refresh: bool,
    ) -> ServiceResult<StartedJob> {
        // Reject junk before it reaches the service.
        let author_id = extract_author_id(profile_url)?;
        tracing::debug!(author_id = %author_id, force_refresh, "starting analysis job");

        let url = format!("{}/analyze", self.base_url);
        let body = serde_json::json!({
            "url": profile_url,
            "forceRefresh": force_refresh,
        });

        let started: StartedJob = self.post(&url, &body).await?;
        Ok(started)
    }

    /// Poll a job once. Poll responses are never cached.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn poll_job(&self, job_id: &str) -> ClientResult<JobPoll> {
        let url = format!("{}/jobs/{}", self.base_url, job_id);
        self.get(&url).await
    }

    /// Poll a job at the given interval until it reaches a terminal state.
    ///
    /// The interval is caller-supplied; backoff strategy is deliberately not
    /// baked in here.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::JobFailed`] on a failed job, or transport
    /// errors from polling.
    pub async fn wait_for_snapshot(
        &self,
        job_id: &str,
        interval: Duration,
    ) -> ServiceResult<AuthorSnapshot> {
        loop {
            let poll = self.poll_job(job_id).await?;
            match poll.status {
                JobState::Running => {
                    tracing::debug!(job_id, progress = poll.progress, "job still running");
                    tokio::time::sleep(interval).await;
                }
                JobState::Completed => {
                    return poll.result.ok_or_else(|| ServiceError::MissingResult {
                        job_id: job_id.to_string(),
                    });
                }
                JobState::Failed => {
                    let message =
                        poll.error.unwrap_or_else(|| "no failure message".to_string());
                    return Err(ServiceError::job_failed(message));
                }
            }
        }
    }

    /// Fetch the finished snapshot for a profile URL, starting a job and
    /// waiting for it at the configured poll interval.
    ///
    /// Completed snapshots are cached; `force_refresh` bypasses the cache
    /// and repopulates it.
    ///
    /// # Errors
    ///
    /// Returns error on invalid URLs, failed jobs, or API failure.
    pub async fn fetch_snapshot(
        &self,
        profile_url: &str,
        force_refresh: bool,
    ) -> ServiceResult<AuthorSnapshot> {
        let cache_key = Self::cache_key(profile_url);

        if !force_refresh {
            if let Some(snapshot) = self.snapshots.get(&cache_key).await {
                tracing::info!(profile_url, "snapshot cache hit");
                return Ok(snapshot);
            }
        }

        let job = self.start_analysis(profile_url, force_refresh).await?;
        let snapshot = self.wait_for_snapshot(&job.job_id, self.poll_interval).await?;
        tracing::info!(
            profile_url,
            records = snapshot.records.len(),
            "snapshot fetched"
        );

        self.snapshots.insert(cache_key, snapshot.clone()).await;
        Ok(snapshot)
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).send().await?;
        let response = self.handle_response(response).await?;
        let value: serde_json::Value = response.json().await?;
        serde_json::from_value(value).map_err(ClientError::from)
    }

    /// Make a POST request.
    async fn post<T>(&self, url: &str, body: &serde_json::Value) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let body_str = serde_json::to_string(body)?;

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body_str)
            .send()
            .await?;

        let response = self.handle_response(response).await?;
        let value: serde_json::Value = response.json().await?;
        serde_json::from_value(value).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }

    /// Cache key for a profile URL.
    fn cache_key(profile_url: &str) -> String {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(profile_url.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl std::fmt::Debug for AnalysisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}
