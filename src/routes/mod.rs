use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};

use crate::template::{NotFoundTemplate, Template};

mod about;
mod assets;
mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub relay: Arc<dyn folio_relay::Relay>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(about::page))
        .route("/about", get(about::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .fallback(fallback)
        .nest_service("/static", assets::AssetsService::new())
        .with_state(app_state)
}
