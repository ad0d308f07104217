use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};
use chrono::NaiveDate;
use loader::{load_words, WordSource};
use word_engine::{archive_view, daily_view, today_local};

use crate::render::{render_archive_page, render_daily_page};

/// Every request is one page load: fetch the document, then render.
#[derive(Clone)]
pub struct SiteState {
    pub source: Arc<dyn WordSource>,
    pub clock: fn() -> NaiveDate,
}

impl SiteState {
    pub fn new(source: Arc<dyn WordSource>) -> Self {
        Self {
            source,
            clock: today_local,
        }
    }
}

pub fn build_router(state: Arc<SiteState>) -> Router {
    Router::new()
        .route("/", get(daily_page))
        .route("/index.html", get(daily_page))
        .route("/previous", get(archive_page))
        .route("/previous.html", get(archive_page))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn daily_page(State(state): State<Arc<SiteState>>) -> Html<String> {
    let outcome = load_words(state.source.as_ref()).await;
    Html(render_daily_page(&daily_view(&outcome, (state.clock)())))
}

async fn archive_page(State(state): State<Arc<SiteState>>) -> Html<String> {
    let outcome = load_words(state.source.as_ref()).await;
    Html(render_archive_page(&archive_view(&outcome)))
}

#[cfg(test)]
#[path = "tests/routes_tests.rs"]
mod tests;
