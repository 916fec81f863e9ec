//! Analysis client tests against a mock service.

use std::time::Duration;

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scholar_compare::client::{AnalysisClient, extract_author_id};
use scholar_compare::error::{ClientError, ServiceError};
use scholar_compare::models::JobState;
use scholar_compare::Config;
use tokio_test::assert_ok;

const PROFILE_URL: &str = "https://scholar.google.com/citations?user=abc123";

fn client_for(server: &MockServer) -> AnalysisClient {
    AnalysisClient::new(Config::for_testing(&server.uri())).unwrap()
}

fn snapshot_json() -> serde_json::Value {
    serde_json::json!({
        "id": "abc123",
        "name": "Ada Lovelace",
        "totalCitations": 321,
        "hIndex": 9,
        "records": [
            {"title": "On Engines", "year": 1843, "citations": 100}
        ],
        "keywords": [{"text": "computation", "count": 3}]
    })
}

// =============================================================================
// Profile URL parsing
// =============================================================================

#[test]
fn test_extract_author_id_roundtrip() {
    let id = assert_ok!(extract_author_id(PROFILE_URL));
    assert_eq!(id, "abc123");
}

#[test]
fn test_extract_author_id_rejects_non_scholar_urls() {
    let err = extract_author_id("https://example.com/?user=abc").unwrap_err();
    assert!(matches!(err, ServiceError::InvalidProfileUrl { .. }));
}

// =============================================================================
// Job protocol
// =============================================================================

#[tokio::test]
async fn test_start_analysis_posts_job() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(serde_json::json!({"url": PROFILE_URL, "forceRefresh": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jobId": "job-1"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let started = client.start_analysis(PROFILE_URL, false).await.unwrap();
    assert_eq!(started.job_id, "job-1");
}

#[tokio::test]
async fn test_start_analysis_rejects_bad_url_without_request() {
    // No mocks mounted: an invalid URL must fail before any HTTP happens.
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client.start_analysis("https://example.com/profile", false).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidProfileUrl { .. }));
}

#[tokio::test]
async fn test_poll_job_running() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "running",
            "progress": 55
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let poll = client.poll_job("job-1").await.unwrap();
    assert_eq!(poll.status, JobState::Running);
    assert_eq!(poll.progress, Some(55));
}

#[tokio::test]
async fn test_wait_for_snapshot_polls_until_complete() {
    let server = MockServer::start().await;

    // First poll: running. Subsequent polls: completed.
    Mock::given(method("GET"))
        .and(path("/jobs/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "running",
            "progress": 10
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/jobs/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "completed",
            "progress": 100,
            "result": snapshot_json()
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let snapshot =
        client.wait_for_snapshot("job-1", Duration::from_millis(0)).await.unwrap();
    assert_eq!(snapshot.name, "Ada Lovelace");
    assert_eq!(snapshot.records.len(), 1);
}

#[tokio::test]
async fn test_wait_for_snapshot_surfaces_job_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs/job-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "failed",
            "error": "no publications found"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.wait_for_snapshot("job-9", Duration::from_millis(0)).await.unwrap_err();
    match err {
        ServiceError::JobFailed { message } => assert_eq!(message, "no publications found"),
        other => panic!("expected JobFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_wait_for_snapshot_missing_result_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs/job-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "completed"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.wait_for_snapshot("job-2", Duration::from_millis(0)).await.unwrap_err();
    assert!(matches!(err, ServiceError::MissingResult { .. }));
}

#[tokio::test]
async fn test_fetch_snapshot_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jobId": "job-1"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/jobs/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "completed",
            "result": snapshot_json()
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let snapshot = client.fetch_snapshot(PROFILE_URL, false).await.unwrap();
    assert_eq!(snapshot.id, "abc123");
    assert_eq!(snapshot.total_citations, 321);
}

// =============================================================================
// HTTP error mapping
// =============================================================================

#[tokio::test]
async fn test_poll_unknown_job_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_string("unknown job"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.poll_job("nope").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound { .. }));
}

#[tokio::test]
async fn test_rate_limit_maps_retry_after() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs/job-1"))
        .respond_with(
            ResponseTemplate::new(429).insert_header("Retry-After", "7"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.poll_job("job-1").await.unwrap_err();
    assert_eq!(err.retry_after(), Some(Duration::from_secs(7)));
}
