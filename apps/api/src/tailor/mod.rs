// Resume tailoring: per language × target variant generation.
// Generated content ALWAYS goes through the humanization pipeline before it
// is returned — the tailoring flow is the internal caller of the core.

pub mod generator;
pub mod handlers;
pub mod prompts;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::humanize::humanize_text;
use crate::language::Language;
use crate::tailor::generator::{GenerationRequest, TextGenerator};

/// Target roles a resume can be tailored towards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetRole {
    #[default]
    Backend,
    Fullstack,
    GptEngineer,
}

impl TargetRole {
    pub fn code(&self) -> &'static str {
        match self {
            TargetRole::Backend => "backend",
            TargetRole::Fullstack => "fullstack",
            TargetRole::GptEngineer => "gpt_engineer",
        }
    }
}

/// Options that influence how tailoring is performed.
#[derive(Debug, Clone, Deserialize)]
pub struct TailorOptions {
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,
    #[serde(default = "default_targets")]
    pub targets: Vec<TargetRole>,
    /// How strongly to rewrite: 1=minimal, 2=balanced, 3=aggressive.
    #[serde(default = "default_aggressiveness")]
    pub aggressiveness: u8,
}

fn default_languages() -> Vec<Language> {
    vec![Language::En, Language::Ru]
}

fn default_targets() -> Vec<TargetRole> {
    vec![TargetRole::Backend]
}

fn default_aggressiveness() -> u8 {
    2
}

impl Default for TailorOptions {
    fn default() -> Self {
        TailorOptions {
            languages: default_languages(),
            targets: default_targets(),
            aggressiveness: default_aggressiveness(),
        }
    }
}

/// A single tailored resume variant.
#[derive(Debug, Clone, Serialize)]
pub struct TailoredResume {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub language: Language,
    pub target: TargetRole,
    pub content: String,
    pub notes: String,
}

/// Generates one variant per language × target, humanizing each before
/// returning it. Fails fast on the first generation error.
pub async fn tailor_resumes(
    generator: &dyn TextGenerator,
    base_resume_text: &str,
    job_description: &str,
    options: &TailorOptions,
) -> Result<Vec<TailoredResume>, AppError> {
    let mut resumes = Vec::with_capacity(options.languages.len() * options.targets.len());

    for &language in &options.languages {
        for &target in &options.targets {
            let request = GenerationRequest {
                base_resume_text,
                job_description,
                language,
                target,
                aggressiveness: options.aggressiveness,
            };
            let content = generator.generate(&request).await?;

            let mut rng = rand::thread_rng();
            let humanized = humanize_text(&content, language, true, &mut rng);

            tracing::info!(
                language = language.code(),
                target = target.code(),
                chars = humanized.len(),
                "tailored variant generated"
            );

            resumes.push(TailoredResume {
                id: Uuid::new_v4(),
                created_at: Utc::now(),
                language,
                target,
                content: humanized,
                notes: generator.notes().to_string(),
            });
        }
    }

    Ok(resumes)
}
