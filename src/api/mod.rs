//! REST API layer: route handlers, DTOs, middleware and router composition.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod openapi;

use axum::Router;
use tower::ServiceBuilder;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new().merge(handlers::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(openapi::swagger_ui());

    router
}

/// Builds the servable application: every route, the CORS and logging
/// layers, and the shared state.
pub fn build_app(state: AppState) -> Router {
    build_router()
        .layer(
            ServiceBuilder::new()
                .layer(middleware::trace_layer())
                .layer(middleware::cors_layer()),
        )
        .with_state(state)
}
