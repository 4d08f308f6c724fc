use axum::{routing::{get, post, put, delete}, Router};
use std::sync::Arc;
use super::AppState;
use super::handlers;

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health::health_check))
        // Registration and login
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        // User records
        .route("/users/{id}", get(handlers::users::get))
        .route("/users/{id}", put(handlers::users::update))
        .route("/users/{id}", delete(handlers::users::delete))
        .with_state(state)
}
