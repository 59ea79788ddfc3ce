//! # nebula_api
//!
//! HTTP API library for Nebula Sports.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use nebula_core::store::ContentStore;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{chat, news, pages, sports};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory content store.
    pub store: Arc<ContentStore>,
    /// API configuration.
    pub config: ApiConfig,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // JSON endpoints consumed by the frontend scripts.
    let api = Router::new()
        .route("/api/sports", get(sports::list_sports_handler))
        .route("/api/news", get(news::list_news_handler))
        .route(
            "/api/chat",
            get(chat::list_chat_handler).post(chat::post_chat_handler),
        );

    // Server-rendered pages.
    let pages = Router::new()
        .route("/", get(pages::index_handler))
        .route("/stream/{sport_id}", get(pages::stream_handler))
        .route("/chat", get(pages::chat_page_handler))
        .route("/analytics", get(pages::analytics_page_handler))
        .route("/profile", get(pages::profile_page_handler));

    Router::new().merge(api).merge(pages).layer(cors).with_state(state)
}
