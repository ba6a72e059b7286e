pub mod cli;
pub mod config;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

use std::sync::Arc;

pub use routes::AppState;

/// Create the app router for testing.
///
/// Builds the Axum router with all routes configured and the given relay
/// injected, useful for integration testing without starting the full
/// server.
pub fn create_app(config: config::Config, relay: Arc<dyn folio_relay::Relay>) -> axum::Router {
    routes::router(AppState { config, relay })
}
