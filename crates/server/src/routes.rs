use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::{Health, Message};

use crate::state::AppState;

pub mod posts;
pub mod users;

pub async fn root() -> Json<Message> {
    Json(Message::new("server is running"))
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router over one shared state.
///
/// `/posts` and `/posts/` are both served from the same post store; they differ only in
/// the shape of the creation reply.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let post_routes = Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/posts/", get(posts::list_posts).post(posts::publish_post));

    let user_routes = Router::new()
        .route("/register", post(users::register))
        .route("/me", get(users::me));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(post_routes)
        .merge(user_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
