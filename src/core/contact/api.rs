//! Contact API endpoint
//!
//! - POST /api/contact - Accept a contact form submission
//!
//! Submissions are validated with the same rules the browser applies, logged,
//! and acknowledged. Nothing is stored.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use super::{CONTACT_ENDPOINT, ContactErrorBody, ContactRequest, ValidationError};
use crate::core::config::Config;

/// Contact API state
#[derive(Clone)]
pub struct ContactApiState {
    pub config: Config,
}

/// Contact API error types
#[derive(Debug, thiserror::Error)]
pub enum ContactApiError {
    #[error("Invalid submission: {}", describe(.0))]
    Invalid(Vec<ValidationError>),

    #[error("Malformed submission: {0}")]
    Malformed(String),
}

fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl IntoResponse for ContactApiError {
    fn into_response(self) -> Response {
        let (status, code, fields) = match &self {
            ContactApiError::Invalid(errors) => {
                let code = if errors
                    .iter()
                    .any(|e| matches!(e, ValidationError::MessageTooLong { .. }))
                {
                    "MESSAGE_TOO_LONG"
                } else {
                    "INVALID_SUBMISSION"
                };
                (StatusCode::BAD_REQUEST, code, errors.clone())
            }
            ContactApiError::Malformed(_) => (StatusCode::BAD_REQUEST, "INVALID_SUBMISSION", Vec::new()),
        };

        let body = ContactErrorBody {
            error: self.to_string(),
            code: code.to_string(),
            details: fields.iter().map(|e| e.to_string()).collect(),
            fields,
        };

        (status, Json(body)).into_response()
    }
}

/// Acknowledgement for an accepted submission
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactAccepted {
    pub success: bool,
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub message: String,
}

/// Create the contact API router
pub fn contact_router(state: ContactApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route(CONTACT_ENDPOINT, post(submit_contact_handler))
        .with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/contact
async fn submit_contact_handler(
    State(state): State<Arc<ContactApiState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactAccepted>), ContactApiError> {
    let Json(request) = payload.map_err(|e| ContactApiError::Malformed(e.body_text()))?;

    if let Err(errors) = request.validate(state.config.contact_max_message_len) {
        tracing::debug!("Rejected contact submission: {}", describe(&errors));
        return Err(ContactApiError::Invalid(errors));
    }

    if state.config.contact_simulated_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.contact_simulated_delay_ms)).await;
    }

    let id = Uuid::new_v4();
    tracing::info!(
        "Contact message {} from {} <{}> ({} chars), inbox: {}",
        id,
        request.name.trim(),
        request.email.trim(),
        request.message.trim().chars().count(),
        state.config.contact_inbox.as_deref().unwrap_or("unset")
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(ContactAccepted {
            success: true,
            id,
            received_at: Utc::now(),
            message: "Thanks for reaching out!".to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;

    fn test_router(max_len: usize) -> Router {
        delayed_router(max_len, 0)
    }

    fn delayed_router(max_len: usize, delay_ms: u64) -> Router {
        contact_router(ContactApiState {
            config: Config {
                contact_inbox: Some("inbox@example.com".to_string()),
                contact_simulated_delay_ms: delay_ms,
                contact_max_message_len: max_len,
            },
        })
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(CONTACT_ENDPOINT)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_submission_is_accepted() {
        let response = test_router(5000)
            .oneshot(post_json(
                r#"{"name":"Alice","email":"a@x.com","message":"hi"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ContactAccepted = serde_json::from_slice(&bytes).unwrap();
        assert!(body.success);
    }

    #[tokio::test]
    async fn test_invalid_submission_lists_problems() {
        let response = test_router(5000)
            .oneshot(post_json(r#"{"name":"","email":"nope","message":"hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ContactErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, "INVALID_SUBMISSION");
        assert_eq!(
            body.details,
            vec!["Name is required", "Please enter a valid email"]
        );
    }

    #[tokio::test]
    async fn test_message_too_long() {
        let response = test_router(3)
            .oneshot(post_json(
                r#"{"name":"Alice","email":"a@x.com","message":"hello"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ContactErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, "MESSAGE_TOO_LONG");
        assert_eq!(
            body.fields,
            vec![ValidationError::MessageTooLong { max: 3, actual: 5 }]
        );
    }

    #[tokio::test]
    async fn test_acceptance_waits_for_configured_delay() {
        let started = tokio::time::Instant::now();
        let response = delayed_router(5000, 120)
            .oneshot(post_json(
                r#"{"name":"Alice","email":"a@x.com","message":"hi"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert!(started.elapsed() >= Duration::from_millis(120));
    }

    #[tokio::test]
    async fn test_rejection_skips_delay() {
        let started = tokio::time::Instant::now();
        let response = delayed_router(5000, 5_000)
            .oneshot(post_json(r#"{"name":"","email":"a@x.com","message":"hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(started.elapsed() < Duration::from_millis(5_000));
    }

    #[tokio::test]
    async fn test_malformed_body_uses_error_shape() {
        let response = test_router(5000)
            .oneshot(post_json(r#"{"name":"Alice""#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ContactErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, "INVALID_SUBMISSION");
        assert!(body.error.starts_with("Malformed submission"));
    }

    #[tokio::test]
    async fn test_get_not_allowed() {
        let request = Request::builder()
            .method("GET")
            .uri(CONTACT_ENDPOINT)
            .body(Body::empty())
            .unwrap();
        let response = test_router(5000).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_error_display() {
        let err = ContactApiError::Invalid(vec![
            ValidationError::EmptyName,
            ValidationError::EmptyMessage,
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid submission: Name is required; Message is required"
        );
    }
}
