use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;
use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .route("/categories", get(handlers::get_categories))
        .route("/categories/:name", get(handlers::get_category))
        .route("/spicy-levels", get(handlers::get_spicy_levels))
        // One-shot recommendation
        .route("/recommendations", post(handlers::create_recommendation))
        // UI session transitions
        .route("/session", get(handlers::get_initial_session))
        .route("/session/select-all", post(handlers::select_all))
        .route("/session/deselect-all", post(handlers::deselect_all))
        .route("/session/recommend", post(handlers::session_recommend))
        .route("/session/recommend-again", post(handlers::session_recommend_again))
}
