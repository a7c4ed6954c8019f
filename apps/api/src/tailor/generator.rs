//! Pluggable text-generation backends for tailoring.
//!
//! Default: `StubGenerator` (deterministic, no network, fully testable).
//! Production: `LlmGenerator`, switched on at startup via `TAILOR_USE_LLM`.
//!
//! `AppState` holds an `Arc<dyn TextGenerator>`, chosen once in `main`.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::language::Language;
use crate::llm_client::LlmClient;
use crate::tailor::prompts::{TAILOR_PROMPT_TEMPLATE, TAILOR_SYSTEM};
use crate::tailor::TargetRole;

/// Everything a backend needs to produce one resume variant.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub base_resume_text: &'a str,
    pub job_description: &'a str,
    pub language: Language,
    pub target: TargetRole,
    pub aggressiveness: u8,
}

/// The text-generation seam: a function from request to generated resume
/// text. The pipeline post-processes whatever comes back, so backends only
/// need to produce plausible prose.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, AppError>;

    /// Human-readable provenance note attached to each variant.
    fn notes(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// StubGenerator — deterministic placeholder backend
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic placeholder content so the API (and its tests) work without
/// an API key or network access.
pub struct StubGenerator;

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, AppError> {
        Ok(build_stub_content(request))
    }

    fn notes(&self) -> &'static str {
        "Stub tailoring only. LLM-backed rewriting is disabled or not configured."
    }
}

fn build_stub_content(request: &GenerationRequest<'_>) -> String {
    let header = format!(
        "[Tailored resume - lang={}, target={}, aggressiveness={}]",
        request.language.code(),
        request.target.code(),
        request.aggressiveness
    );

    let jd_preview: String = request
        .job_description
        .lines()
        .take(3)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    [
        header.as_str(),
        "",
        "=== Job description preview ===",
        if jd_preview.is_empty() {
            "(no job description provided)"
        } else {
            jd_preview.as_str()
        },
        "",
        "=== Base resume start ===",
        request.base_resume_text.trim(),
        "=== Base resume end ===",
    ]
    .join("\n")
}

// ────────────────────────────────────────────────────────────────────────────
// LlmGenerator — LLM-backed backend
// ────────────────────────────────────────────────────────────────────────────

/// Generates the variant with a single LLM call through `LlmClient`.
pub struct LlmGenerator(pub LlmClient);

#[async_trait]
impl TextGenerator for LlmGenerator {
    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, AppError> {
        let prompt = TAILOR_PROMPT_TEMPLATE
            .replace("{language}", request.language.code())
            .replace("{target}", request.target.code())
            .replace("{aggressiveness}", &request.aggressiveness.to_string())
            .replace("{job_description}", request.job_description)
            .replace("{base_resume}", request.base_resume_text);

        self.0
            .call_text(&prompt, TAILOR_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Resume tailoring failed: {e}")))
    }

    fn notes(&self) -> &'static str {
        "Generated with the configured LLM backend."
    }
}
