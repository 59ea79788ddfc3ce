//! Server-rendered page handlers.
//!
//! Each page is a typed Askama template; the handlers only decide what data
//! a template receives. Only the stream detail page takes any context.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;
use nebula_core::models::Sport;

use crate::AppState;
use crate::error::{AppError, AppResult};

/// Body of the 404 returned for an unknown sport id.
const SPORT_NOT_FOUND: &str = "Спорт не найден";

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage;

#[derive(Template)]
#[template(path = "chat.html")]
struct ChatPage;

#[derive(Template)]
#[template(path = "analytics.html")]
struct AnalyticsPage;

#[derive(Template)]
#[template(path = "profile.html")]
struct ProfilePage;

#[derive(Template)]
#[template(path = "stream.html")]
struct StreamPage<'a> {
    sport: &'a Sport,
}

fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}

/// `GET /` — home page.
pub async fn index_handler() -> AppResult<Html<String>> {
    render(&IndexPage)
}

/// `GET /stream/{sport_id}` — stream detail page for one sport, 404 if the
/// id is unknown.
pub async fn stream_handler(
    State(state): State<AppState>,
    Path(sport_id): Path<u32>,
) -> AppResult<Html<String>> {
    let sport = state
        .store
        .sport_by_id(sport_id)
        .ok_or_else(|| AppError::NotFound(SPORT_NOT_FOUND.to_string()))?;
    render(&StreamPage { sport })
}

/// `GET /chat` — chat page.
pub async fn chat_page_handler() -> AppResult<Html<String>> {
    render(&ChatPage)
}

/// `GET /analytics` — analytics page.
pub async fn analytics_page_handler() -> AppResult<Html<String>> {
    render(&AnalyticsPage)
}

/// `GET /profile` — profile page.
pub async fn profile_page_handler() -> AppResult<Html<String>> {
    render(&ProfilePage)
}
