pub mod adapters;
pub mod config;
pub mod domain;
pub mod services;

use {
    axum::{
        Router,
        extract::DefaultBodyLimit,
        routing::{get, post},
    },
    domain::{id::PriceId, provider::SubscriptionProvider},
    std::{path::Path, sync::Arc},
    tower_http::{services::ServeDir, trace::TraceLayer},
};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn SubscriptionProvider>,
    pub price_id: PriceId,
}

/// API routes, with every other path served from `static_dir`.
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(adapters::http::health))
        .route(
            "/create-subscription",
            post(adapters::http::create_subscription_handler),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
