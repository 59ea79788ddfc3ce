//! Sports catalog request handler.

use axum::Json;
use axum::extract::State;
use nebula_core::models::Sport;

use crate::AppState;

/// `GET /api/sports` — the full sports catalog in seeded order.
pub async fn list_sports_handler(State(state): State<AppState>) -> Json<Vec<Sport>> {
    Json(state.store.sports().to_vec())
}
