//! Axum route handlers for the Tailoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailor::{tailor_resumes, TailorOptions, TailoredResume};

#[derive(Debug, Deserialize)]
pub struct TailorRequest {
    pub base_resume_text: String,
    pub job_description: String,
    #[serde(default)]
    pub options: TailorOptions,
}

#[derive(Debug, Serialize)]
pub struct TailorResponse {
    pub resumes: Vec<TailoredResume>,
}

/// POST /api/v1/tailor
///
/// Generates one tailored, humanized resume variant per requested
/// language × target pair.
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(request): Json<TailorRequest>,
) -> Result<Json<TailorResponse>, AppError> {
    if request.base_resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "base_resume_text cannot be empty".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    if !(1..=3).contains(&request.options.aggressiveness) {
        return Err(AppError::Validation(
            "aggressiveness must be between 1 and 3".to_string(),
        ));
    }
    if request.options.languages.is_empty() || request.options.targets.is_empty() {
        return Err(AppError::Validation(
            "languages and targets cannot be empty".to_string(),
        ));
    }

    let resumes = tailor_resumes(
        state.generator.as_ref(),
        &request.base_resume_text,
        &request.job_description,
        &request.options,
    )
    .await?;

    Ok(Json(TailorResponse { resumes }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::tailor::TargetRole;

    #[test]
    fn test_tailor_request_defaults_options() {
        let request: TailorRequest = serde_json::from_str(
            r#"{"base_resume_text": "resume", "job_description": "jd"}"#,
        )
        .unwrap();
        assert_eq!(request.options.languages, vec![Language::En, Language::Ru]);
        assert_eq!(request.options.targets, vec![TargetRole::Backend]);
        assert_eq!(request.options.aggressiveness, 2);
    }

    #[test]
    fn test_tailor_request_explicit_options() {
        let request: TailorRequest = serde_json::from_str(
            r#"{
                "base_resume_text": "resume",
                "job_description": "jd",
                "options": {"languages": ["en"], "targets": ["fullstack"], "aggressiveness": 3}
            }"#,
        )
        .unwrap();
        assert_eq!(request.options.languages, vec![Language::En]);
        assert_eq!(request.options.targets, vec![TargetRole::Fullstack]);
        assert_eq!(request.options.aggressiveness, 3);
    }
}
