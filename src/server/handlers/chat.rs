use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::server::{config::AppState, models::chat::ChatMessage};

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
    /// Prior turns, owned by the page. Absent means a fresh conversation.
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub history: Vec<ChatMessage>,
}

/// Runs one triage exchange and returns the updated conversation.
///
/// An inference fault is answered in-band by the service and still returns
/// 200; only a transcript write failure fails the submission.
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, (StatusCode, String)> {
    info!(
        "Handling chat turn with {} prior messages",
        request.history.len()
    );

    let history = state
        .triage
        .handle(&request.message, &request.history)
        .await
        .map_err(|e| {
            error!("Failed to record transcript: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to record transcript: {}", e),
            )
        })?;

    Ok(Json(SendMessageResponse { history }))
}
