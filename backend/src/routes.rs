use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    docs, handlers, middleware::auth as auth_middleware, services::assistant::AssistantClient,
    state::AppState,
};

/// Composes the full application: public routes, the redirect-gated panel
/// surface, and the JSON-gated API, with shared CORS/Trace layers.
pub fn build_router(state: AppState, assistant: Arc<dyn AssistantClient>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/login", post(handlers::auth::login));

    // Panel surface: a missing session redirects to the login page.
    let panel_routes = Router::new()
        .route("/panel", get(handlers::dashboard::panel))
        .route("/logout", post(handlers::auth::logout))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::session_auth_or_login,
        ));

    // JSON API: a missing session is a 401 with a structured body.
    let api_routes = Router::new()
        .route("/api/chat", post(handlers::chat::chat))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::session_auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(panel_routes)
        .merge(api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                        .allow_headers(Any),
                ),
        )
        .layer(Extension(assistant))
        .with_state(state)
}
