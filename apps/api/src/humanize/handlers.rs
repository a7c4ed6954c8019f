//! Axum route handlers for the Humanizer API.

use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::humanize::ai_score::{check_ai_score, AiScoreResult};
use crate::humanize::{humanize_with_scores, HumanizeOutcome};
use crate::language::Language;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct HumanizeRequest {
    pub text: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_apply_variations")]
    pub apply_variations: bool,
}

fn default_apply_variations() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct AiScoreRequest {
    pub text: String,
    #[serde(default)]
    pub language: Language,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis/humanize
///
/// Rewrites the text through the humanization pipeline and returns it together
/// with AI scores for the original and the result. Empty text is a no-op.
pub async fn handle_humanize(
    Json(request): Json<HumanizeRequest>,
) -> Result<Json<HumanizeOutcome>, AppError> {
    let mut rng = rand::thread_rng();
    let outcome = humanize_with_scores(
        &request.text,
        request.language,
        request.apply_variations,
        &mut rng,
    );

    tracing::debug!(
        language = request.language.code(),
        before = outcome.ai_score_before.score,
        after = outcome.ai_score_after.score,
        "text humanized"
    );

    Ok(Json(outcome))
}

/// POST /api/v1/analysis/ai-score
///
/// Standalone AI-likelihood check without rewriting the text.
pub async fn handle_ai_score(
    Json(request): Json<AiScoreRequest>,
) -> Result<Json<AiScoreResult>, AppError> {
    Ok(Json(check_ai_score(&request.text, request.language)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_request_defaults() {
        let request: HumanizeRequest = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(request.language, Language::En);
        assert!(request.apply_variations);
    }

    #[test]
    fn test_humanize_request_explicit_fields() {
        let request: HumanizeRequest = serde_json::from_str(
            r#"{"text": "привет", "language": "ru", "apply_variations": false}"#,
        )
        .unwrap();
        assert_eq!(request.language, Language::Ru);
        assert!(!request.apply_variations);
    }

    #[test]
    fn test_ai_score_request_default_language() {
        let request: AiScoreRequest = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(request.language, Language::En);
    }

    #[tokio::test]
    async fn test_handle_ai_score_empty_text() {
        let response = handle_ai_score(Json(AiScoreRequest {
            text: String::new(),
            language: Language::En,
        }))
        .await
        .unwrap();
        assert_eq!(response.0.score, 0);
    }

    #[tokio::test]
    async fn test_handle_humanize_empty_text_is_no_op() {
        let response = handle_humanize(Json(HumanizeRequest {
            text: String::new(),
            language: Language::En,
            apply_variations: true,
        }))
        .await
        .unwrap();
        assert_eq!(response.0.humanized, "");
        assert_eq!(response.0.ai_score_before.score, 0);
        assert_eq!(response.0.ai_score_after.score, 0);
    }
}
