// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests against a live server on a random port.

use solace_gateway::{build_router, GatewayState};
use solace_test_utils::TestHarness;
use tokio_util::sync::CancellationToken;

/// Spin up a test server on a random port and return the base URL.
async fn start_test_server(harness: &TestHarness, shutdown: CancellationToken) -> String {
    let router = build_router(GatewayState::new(harness.agent()), &[]);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
            .unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn conversation_over_http() {
    let harness = TestHarness::builder().with_random(vec![1]).build().unwrap();
    let shutdown = CancellationToken::new();
    let base = start_test_server(&harness, shutdown.clone()).await;
    let client = reqwest::Client::new();

    let reply: serde_json::Value = client
        .post(format!("{base}/api/chat"))
        .json(&serde_json::json!({"message": "I feel so anxious and scared today"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reply["context"]["emotion"], "fear");
    assert_eq!(reply["context"]["themes"], serde_json::json!(["compassion"]));

    let reply: serde_json::Value = client
        .post(format!("{base}/api/chat"))
        .json(&serde_json::json!({"message": "I want to kill myself"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reply["context"]["is_crisis"], true);
    assert!(reply["response"].as_str().unwrap().contains("988"));

    let insights: serde_json::Value = client
        .get(format!("{base}/api/insights"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(insights["insights"]["total_interactions"], 2);
    assert_eq!(insights["insights"]["emotions_expressed"], serde_json::json!(["fear"]));

    let meditation: serde_json::Value = client
        .get(format!("{base}/api/meditation"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        meditation["meditation"],
        solace_dialogue::ContentLibrary::builtin().meditations()[1]
    );

    shutdown.cancel();
}

#[tokio::test]
async fn malformed_body_is_client_error() {
    let harness = TestHarness::new().unwrap();
    let shutdown = CancellationToken::new();
    let base = start_test_server(&harness, shutdown.clone()).await;

    let status = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .header("content-type", "application/json")
        .body("{\"text\": 1}")
        .send()
        .await
        .unwrap()
        .status();
    assert!(status.is_client_error());
    shutdown.cancel();
}
