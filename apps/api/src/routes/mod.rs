pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as profile;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile extraction API
        .route("/api/v1/profile/autofill", post(profile::handle_autofill))
        .route("/api/v1/profile/upload", post(profile::handle_upload))
        .route("/api/v1/profile/validate", post(profile::handle_validate))
        // Generation API
        .route(
            "/api/v1/generate/resume",
            post(generation::handle_generate_resume),
        )
        .route(
            "/api/v1/generate/cover-letter",
            post(generation::handle_generate_cover_letter),
        )
        .route(
            "/api/v1/generate/linkedin",
            post(generation::handle_generate_linkedin),
        )
        // Interview coaching API
        .route(
            "/api/v1/interview/questions",
            get(generation::handle_interview_questions),
        )
        .route(
            "/api/v1/interview/evaluate",
            post(generation::handle_evaluate_answer),
        )
        // Export API
        .route(
            "/api/v1/export/resume",
            post(generation::handle_export_resume),
        )
        .route(
            "/api/v1/export/cover-letter",
            post(generation::handle_export_cover_letter),
        )
        .route(
            "/api/v1/export/linkedin",
            post(generation::handle_export_linkedin),
        )
        .with_state(state)
}
