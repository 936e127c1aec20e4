pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::briefing::handlers as briefing_handlers;
use crate::state::AppState;
use crate::suggest::handlers as suggest_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/briefings",
            post(briefing_handlers::handle_generate_briefing),
        )
        .route(
            "/api/v1/industry/suggest",
            post(suggest_handlers::handle_suggest_industry),
        )
        .with_state(state)
}
