//! News ticker request handler.

use axum::Json;
use axum::extract::State;
use nebula_core::models::NewsItem;

use crate::AppState;

/// `GET /api/news` — all news items in seeded order.
pub async fn list_news_handler(State(state): State<AppState>) -> Json<Vec<NewsItem>> {
    Json(state.store.news().to_vec())
}
