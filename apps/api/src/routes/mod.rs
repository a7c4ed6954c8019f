pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::analysis::handlers as analysis_handlers;
use crate::humanize::handlers as humanize_handlers;
use crate::state::AppState;
use crate::tailor::handlers as tailor_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API — pure text analysis, no persistence
        .route(
            "/api/v1/analysis/coverage",
            post(analysis_handlers::handle_coverage),
        )
        .route(
            "/api/v1/analysis/humanize",
            post(humanize_handlers::handle_humanize),
        )
        .route(
            "/api/v1/analysis/ai-score",
            post(humanize_handlers::handle_ai_score),
        )
        // Tailoring API
        .route("/api/v1/tailor", post(tailor_handlers::handle_tailor))
        .with_state(state)
}
