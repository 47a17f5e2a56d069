//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::{header::CONTENT_TYPE, Method},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::chat::ChatStore;
use crate::kernel::EventBus;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::routes::{
    graphql_batch_handler, graphql_handler, graphql_subscriptions_handler, health_handler,
    stream_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: ChatStore,
    pub event_bus: EventBus,
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let context = GraphQLContext::new(state.store.clone(), state.event_bus.clone());

    // Add context to request extensions
    request.extensions_mut().insert(context);

    next.run(request).await
}

/// Build the Axum application router.
///
/// Returns (Router, AppState) - the state is shared so tests and callers
/// can reach the store and bus behind a running app.
pub fn build_app(event_channel_capacity: usize) -> (Router, AppState) {
    // Create GraphQL schema (singleton)
    let schema = Arc::new(create_schema());

    let app_state = AppState {
        store: ChatStore::new(),
        event_bus: EventBus::with_capacity(event_channel_capacity),
    };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    // Build router
    let mut router = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/graphql/batch", post(graphql_batch_handler))
        .route("/subscriptions", get(graphql_subscriptions_handler));

    // GraphQL playground only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        use crate::server::routes::graphql_playground;
        router = router.route("/graphql", get(graphql_playground));
    }

    let app = router
        // SSE feed of new-message events
        .route("/streams/messages", get(stream_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(create_graphql_context)) // Create GraphQL context
        .layer(Extension(app_state.clone())) // Add shared state (must be after middlewares that need it)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State (schema for GraphQL handlers)
        .with_state(schema);

    (app, app_state)
}
