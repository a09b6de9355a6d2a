pub mod sentiment;
pub mod tweets;

use crate::AppState;
use axum::{Router, routing::get};
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(tweet_routes())
        .route("/api/sentiment", get(sentiment::get_sentiment))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn tweet_routes() -> Router<AppState> {
    Router::new()
        .route("/api/tweets", get(tweets::search_tweets))
        .route("/api/tweets/trend", get(tweets::get_trends))
        .route("/api/tweets/map", get(tweets::get_map))
}
