use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use crate::services::conversation;
use crate::state::AppState;

#[derive(Deserialize)]
struct EventEnvelope {
    #[serde(rename = "type")]
    kind: String,
    challenge: Option<String>,
    event: Option<MessageEvent>,
}

#[derive(Deserialize)]
struct MessageEvent {
    #[serde(rename = "type")]
    kind: String,
    user: Option<String>,
    text: Option<String>,
    channel: Option<String>,
    ts: Option<String>,
    thread_ts: Option<String>,
    bot_id: Option<String>,
    subtype: Option<String>,
}

/// Slack signs each request as `v0=HMAC-SHA256(secret, "v0:{ts}:{body}")`,
/// hex-encoded.
fn validate_slack_signature(
    signing_secret: &str,
    signature: &str,
    timestamp: &str,
    body: &[u8],
) -> bool {
    let mut mac = match Hmac::<Sha256>::new_from_slice(signing_secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    mac.update(b"v0:");
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(body);

    let expected = format!("v0={}", hex::encode(mac.finalize().into_bytes()));
    expected == signature
}

pub async fn slack_events(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // Validate request signature (skip if signing secret is empty — dev mode)
    if !state.config.slack_signing_secret.is_empty() {
        let signature = headers
            .get("x-slack-signature")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        let timestamp = headers
            .get("x-slack-request-timestamp")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if signature.is_empty()
            || !validate_slack_signature(
                &state.config.slack_signing_secret,
                signature,
                timestamp,
                &body,
            )
        {
            tracing::warn!("invalid Slack request signature");
            return (StatusCode::FORBIDDEN, "Invalid signature").into_response();
        }
    }

    let envelope: EventEnvelope = match serde_json::from_slice(&body) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(error = %e, "unparseable Slack event payload");
            return (StatusCode::BAD_REQUEST, "Bad payload").into_response();
        }
    };

    // URL-verification handshake when the endpoint is first registered
    if envelope.kind == "url_verification" {
        let challenge = envelope.challenge.unwrap_or_default();
        return axum::Json(serde_json::json!({ "challenge": challenge })).into_response();
    }

    if envelope.kind != "event_callback" {
        return StatusCode::OK.into_response();
    }

    let Some(event) = envelope.event else {
        return StatusCode::OK.into_response();
    };

    // Only plain user messages; bot echoes and edits/joins would loop or
    // double-fire the protocol
    if event.kind != "message" || event.bot_id.is_some() || event.subtype.is_some() {
        return StatusCode::OK.into_response();
    }

    let (Some(user), Some(text), Some(channel), Some(ts)) =
        (event.user, event.text, event.channel, event.ts)
    else {
        return StatusCode::OK.into_response();
    };

    tracing::info!(user = %user, channel = %channel, "incoming message");

    if let Some(reply) = conversation::process_message(&state, &user, &text).await {
        let thread_ts = event.thread_ts.as_deref().unwrap_or(&ts);
        if let Err(e) = state.chat.post_message(&channel, thread_ts, &reply).await {
            tracing::error!(error = %e, channel = %channel, "failed to post reply");
        }
    }

    StatusCode::OK.into_response()
}
