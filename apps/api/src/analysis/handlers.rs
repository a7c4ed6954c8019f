//! Axum route handlers for the Analysis API.

use axum::Json;
use serde::Deserialize;

use crate::analysis::coverage::{compute_coverage, CoverageResult};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct CoverageRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// POST /api/v1/analysis/coverage
///
/// Computes keyword coverage of a resume against a job description. Empty
/// texts are accepted — the scorer is total and reports zero coverage rather
/// than failing.
pub async fn handle_coverage(
    Json(request): Json<CoverageRequest>,
) -> Result<Json<CoverageResult>, AppError> {
    let result = compute_coverage(&request.resume_text, &request.job_description);

    tracing::debug!(
        matched = result.matched.len(),
        missing = result.missing.len(),
        score = result.score,
        "coverage computed"
    );

    Ok(Json(result))
}
