//! Chat request handlers.

use axum::Json;
use axum::extract::State;
use nebula_core::models::ChatMessage;
use serde::Deserialize;

use crate::AppState;

/// Body of `POST /api/chat`.
///
/// Both fields are optional: absent fields are defaulted by the store, never
/// rejected, so `{}` is a valid post.
#[derive(Debug, Default, Deserialize)]
pub struct PostChatRequest {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /api/chat` — the full chat log in append order.
pub async fn list_chat_handler(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    Json(state.store.chat_messages().await)
}

/// `POST /api/chat` — append a message and echo the created record back.
pub async fn post_chat_handler(
    State(state): State<AppState>,
    Json(body): Json<PostChatRequest>,
) -> Json<ChatMessage> {
    Json(state.store.post_chat(body.user, body.message).await)
}
