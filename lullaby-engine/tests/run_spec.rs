//! Integration specs for the job engine.
//!
//! Uses wiremock to simulate the provider's async-invoke API without
//! external dependencies: submission, a poll lifecycle of arbitrary length,
//! provider-side failure, timeout, and unreachable-endpoint escalation.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lullaby_client::InferenceClient;
use lullaby_core::domain::job::{JobError, JobHandle, JobRequest};
use lullaby_engine::{EngineConfig, Orchestrator, PollBudget, PollError, Poller};

fn test_config(base_url: &str) -> EngineConfig {
    let mut config = EngineConfig::new("test-key");
    config.base_url = base_url.to_string();
    config.poll_interval = Duration::from_millis(10);
    config.max_poll_attempts = 5;
    config.network_error_threshold = 3;
    config
}

async fn mount_submit(server: &MockServer, request_id: &str) {
    Mock::given(method("POST"))
        .and(path("/async-invoke"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "request_id": request_id })),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_run_completes_after_repeated_pending() {
    let server = MockServer::start().await;
    mount_submit(&server, "req-1").await;

    // Two in-flight reports (one of them a label we do not know), then done.
    Mock::given(method("GET"))
        .and(path("/async-invoke/req-1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "queued" })))
        .up_to_n_times(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/async-invoke/req-1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "COMPLETED" })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/async-invoke/req-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "output": { "audio": { "url": "https://cdn/x.mp3" } } })),
        )
        .mount(&server)
        .await;

    let orchestrator = Orchestrator::new(&test_config(&server.uri()));
    let artifact = orchestrator
        .run(JobRequest::narration("tts-model", "Hello", "Rachel", "en"))
        .await
        .expect("job should complete");

    assert_eq!(artifact.request_id, "req-1");
    assert_eq!(artifact.url, "https://cdn/x.mp3");
}

#[tokio::test]
async fn test_unrecognized_statuses_count_as_pending() {
    let server = MockServer::start().await;
    mount_submit(&server, "req-2").await;

    Mock::given(method("GET"))
        .and(path("/async-invoke/req-2/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "WARMING_UP" })))
        .up_to_n_times(3)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/async-invoke/req-2/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "COMPLETED" })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/async-invoke/req-2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "output": { "url": "https://x/a.mp3" } })),
        )
        .mount(&server)
        .await;

    let orchestrator = Orchestrator::new(&test_config(&server.uri()));
    let artifact = orchestrator
        .run(JobRequest::sound_effect("audio-model", "gentle rain", 10))
        .await
        .expect("unknown intermediate labels must not fail the job");

    assert_eq!(artifact.url, "https://x/a.mp3");
}

#[tokio::test]
async fn test_budget_exhaustion_is_timeout_not_failure() {
    let server = MockServer::start().await;
    mount_submit(&server, "req-3").await;

    Mock::given(method("GET"))
        .and(path("/async-invoke/req-3/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "IN_PROGRESS" })))
        .mount(&server)
        .await;

    let orchestrator = Orchestrator::new(&test_config(&server.uri()));
    let err = orchestrator
        .run(JobRequest::narration("tts-model", "Hello", "Rachel", "en"))
        .await
        .expect_err("job never completes");

    match err {
        JobError::JobTimedOut { attempts } => assert_eq!(attempts, 5),
        other => panic!("expected JobTimedOut, got {other:?}"),
    }
}

#[tokio::test]
async fn test_provider_reported_failure() {
    let server = MockServer::start().await;
    mount_submit(&server, "req-4").await;

    Mock::given(method("GET"))
        .and(path("/async-invoke/req-4/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "FAILED", "error": "voice not found" })),
        )
        .mount(&server)
        .await;

    let orchestrator = Orchestrator::new(&test_config(&server.uri()));
    let err = orchestrator
        .run(JobRequest::narration("tts-model", "Hello", "NoSuchVoice", "en"))
        .await
        .expect_err("provider declared the job broken");

    match err {
        JobError::JobFailed(message) => assert!(message.contains("voice not found")),
        other => panic!("expected JobFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_submission_without_request_id_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/async-invoke"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "detail": "accepted" })))
        .mount(&server)
        .await;

    let orchestrator = Orchestrator::new(&test_config(&server.uri()));
    let err = orchestrator
        .run(JobRequest::narration("tts-model", "Hello", "Rachel", "en"))
        .await
        .expect_err("a handle must never be issued without an id");

    assert!(matches!(err, JobError::SubmissionFailed(_)));
}

#[tokio::test]
async fn test_invalid_request_rejected_before_any_network_call() {
    // Dead address: a network call would error differently than validation.
    let orchestrator = Orchestrator::new(&test_config("http://127.0.0.1:9"));
    let err = orchestrator
        .run(JobRequest::narration("tts-model", "", "Rachel", "en"))
        .await
        .expect_err("empty narration text is invalid");

    match err {
        JobError::SubmissionFailed(message) => assert!(message.contains("non-empty text")),
        other => panic!("expected SubmissionFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_completed_body_without_url_is_malformed() {
    let server = MockServer::start().await;
    mount_submit(&server, "req-5").await;

    Mock::given(method("GET"))
        .and(path("/async-invoke/req-5/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "COMPLETED" })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/async-invoke/req-5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "output": {} })))
        .mount(&server)
        .await;

    let orchestrator = Orchestrator::new(&test_config(&server.uri()));
    let err = orchestrator
        .run(JobRequest::narration("tts-model", "Hello", "Rachel", "en"))
        .await
        .expect_err("no artifact url anywhere in the body");

    assert!(matches!(err, JobError::ResultMalformed));
}

#[tokio::test]
async fn test_consecutive_transport_errors_escalate() {
    // Nothing listens here; every status check is a transport error. With a
    // threshold of 3, the fourth consecutive error escalates.
    let client = Arc::new(InferenceClient::new("http://127.0.0.1:9", "test-key"));
    let poller = Poller::new(
        client,
        PollBudget {
            interval: Duration::from_millis(1),
            max_attempts: 10,
            network_error_threshold: 3,
        },
    );

    let handle = JobHandle::new("req-err");
    match poller.poll_until_terminal(&handle).await {
        Err(PollError::Unavailable { consecutive, .. }) => assert_eq!(consecutive, 4),
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_decomposed_submit_status_result() {
    let server = MockServer::start().await;
    mount_submit(&server, "req-6").await;

    Mock::given(method("GET"))
        .and(path("/async-invoke/req-6/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "IN_PROGRESS" })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/async-invoke/req-6/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "COMPLETED" })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/async-invoke/req-6"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "audio_url": "https://cdn/n.mp3" })),
        )
        .mount(&server)
        .await;

    // The three caller-visible operations, driven separately.
    let orchestrator = Orchestrator::new(&test_config(&server.uri()));

    let handle = orchestrator
        .submit(JobRequest::narration("tts-model", "Hello", "Rachel", "en"))
        .await
        .expect("submission succeeds");
    assert_eq!(handle.request_id, "req-6");

    let first = orchestrator.status(&handle.request_id).await.unwrap();
    assert_eq!(first, "IN_PROGRESS");

    let second = orchestrator.status(&handle.request_id).await.unwrap();
    assert_eq!(second, "COMPLETED");

    let artifact = orchestrator.fetch_result(&handle.request_id).await.unwrap();
    assert_eq!(artifact.url, "https://cdn/n.mp3");
}
