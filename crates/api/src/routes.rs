use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Full HTTP surface. CORS is open to every origin: wallets and dapps call
/// the gateway and relay endpoints straight from the browser.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(handlers::gateway::routes())
        .nest(
            "/api",
            handlers::records::routes().merge(handlers::relay::routes()),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
