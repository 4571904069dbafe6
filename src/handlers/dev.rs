use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::services::conversation;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DevMessage {
    pub user_id: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct DevResponse {
    /// None when the message was classified as unrelated (silent no-op).
    pub reply: Option<String>,
}

/// Feed a simulated inbound message through the conversation engine
/// without going anywhere near Slack.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DevMessage>,
) -> Json<DevResponse> {
    let reply = conversation::process_message(&state, &payload.user_id, &payload.message).await;
    Json(DevResponse { reply })
}
