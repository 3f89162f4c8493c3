// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway JSON API.

use std::collections::BTreeSet;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use solace_core::{Emotion, Intent, Theme, TurnContext};
use solace_memory::Insights;
use tracing::debug;

use crate::server::GatewayState;

/// Request body for POST /api/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Client-side context. Accepted for compatibility and not used.
    #[serde(default)]
    pub context: Option<serde_json::Value>,
}

/// Signals derived from the message, echoed back to the client.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatContext {
    pub emotion: Option<Emotion>,
    pub intent: Intent,
    pub is_crisis: bool,
    pub themes: BTreeSet<Theme>,
}

impl From<TurnContext> for ChatContext {
    fn from(context: TurnContext) -> Self {
        Self {
            emotion: context.emotion,
            intent: context.intent,
            is_crisis: context.is_crisis,
            themes: context.themes,
        }
    }
}

/// Response body for POST /api/chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub context: ChatContext,
}

#[derive(Debug, Serialize)]
pub struct MeditationResponse {
    pub meditation: String,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: Insights,
}

/// Body shared by the fixed-text endpoints.
#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub response: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    pub service: String,
    /// Binary version.
    pub version: String,
    pub uptime_secs: u64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// POST /api/chat
///
/// Runs the message through the agent. Backend failures never reach the
/// client; only an empty message is rejected.
pub async fn post_chat(State(state): State<GatewayState>, Json(body): Json<ChatRequest>) -> Response {
    if body.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "message must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    let (response, context) = state.agent.interact_with_context(&body.message).await;
    debug!(intent = %context.intent, chars = response.len(), "chat reply sent");

    Json(ChatResponse {
        response,
        context: context.into(),
    })
    .into_response()
}

/// GET /api/meditation
pub async fn get_meditation(State(state): State<GatewayState>) -> Json<MeditationResponse> {
    Json(MeditationResponse {
        meditation: state.agent.daily_meditation(),
    })
}

/// GET /api/insights
pub async fn get_insights(State(state): State<GatewayState>) -> Json<InsightsResponse> {
    Json(InsightsResponse {
        insights: state.agent.insights().await,
    })
}

/// POST /api/check-in
pub async fn post_check_in(State(state): State<GatewayState>) -> Json<TextResponse> {
    Json(TextResponse {
        response: state.agent.check_in().to_string(),
    })
}

/// POST /api/farewell
pub async fn post_farewell(State(state): State<GatewayState>) -> Json<TextResponse> {
    Json(TextResponse {
        response: state.agent.farewell().to_string(),
    })
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: crate::SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use solace_test_utils::TestHarness;
    use tower::ServiceExt;

    use crate::server::build_router;

    async fn call(harness: &TestHarness, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let router = build_router(GatewayState::new(harness.agent()), &[]);
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn chat(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn chat_echoes_context() {
        let harness = TestHarness::new().unwrap();
        let (status, json) = call(
            &harness,
            chat(r#"{"message": "I feel so sad and lonely", "context": {"client": "web"}}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["context"]["emotion"], "sadness");
        assert_eq!(json["context"]["intent"], "emotional_support");
        assert_eq!(json["context"]["is_crisis"], false);
        assert_eq!(json["context"]["themes"], serde_json::json!([]));
        assert!(json["response"].as_str().unwrap().starts_with("I hear you."));
    }

    #[tokio::test]
    async fn empty_message_is_rejected() {
        let harness = TestHarness::new().unwrap();
        let (status, json) = call(&harness, chat(r#"{"message": "   "}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "message must not be empty");
        assert_eq!(harness.agent().insights().await.total_interactions, 0);
    }

    #[tokio::test]
    async fn health_reports_service() {
        let harness = TestHarness::new().unwrap();
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, json) = call(&harness, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "solace");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn fixed_text_endpoints() {
        let harness = TestHarness::new().unwrap();
        let check_in = Request::builder()
            .method("POST")
            .uri("/api/check-in")
            .body(Body::empty())
            .unwrap();
        let (_, json) = call(&harness, check_in).await;
        assert_eq!(
            json["response"],
            "How are you feeling today? Take a moment to check in with yourself."
        );

        let farewell = Request::builder()
            .method("POST")
            .uri("/api/farewell")
            .body(Body::empty())
            .unwrap();
        let (_, json) = call(&harness, farewell).await;
        assert_eq!(json["response"], harness.agent().farewell());
    }
}
