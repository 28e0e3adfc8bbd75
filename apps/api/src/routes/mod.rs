pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ranking::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/rankings",
            post(handlers::handle_create_ranking).get(handlers::handle_list_saved),
        )
        .route(
            "/api/v1/rankings/csv",
            post(handlers::handle_create_ranking_csv),
        )
        .with_state(state)
}
