use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::InboundMessage;
use crate::services::conversation;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// Subscription handshake: echo the challenge back when the token matches.
pub async fn verify_webhook(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VerifyParams>,
) -> Result<String, AppError> {
    match params.verify_token.as_deref() {
        Some(token) if token == state.config.verify_token => {
            tracing::info!("webhook verified");
            Ok(params.challenge.unwrap_or_default())
        }
        _ => {
            tracing::warn!("webhook verification failed");
            Err(AppError::VerificationFailed)
        }
    }
}

/// Always answers `200 OK`. Replies to the user go out through the messaging
/// provider, never in this response.
pub async fn receive_message(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> (StatusCode, &'static str) {
    let envelope: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "ignoring non-JSON webhook body");
            return ok();
        }
    };

    let Some(msg) = InboundMessage::from_envelope(&envelope) else {
        tracing::debug!("ignoring webhook without a text message");
        return ok();
    };

    tracing::info!(from = %msg.sender_phone, body = %msg.text, "incoming WhatsApp message");

    match conversation::process_turn(&state, &msg.sender_phone, &msg.text).await {
        Ok(outcome) => {
            tracing::debug!(from = %msg.sender_phone, outcome = ?outcome, "turn finished");
        }
        Err(e) => {
            tracing::error!(error = %e, from = %msg.sender_phone, "conversation turn failed");
        }
    }

    ok()
}

fn ok() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
