//! Humanization pipeline — rewrites AI-sounding text into something a person
//! would plausibly write, and scores AI likelihood before/after.
//!
//! Every function here is pure over (text, language, rng): no I/O, no shared
//! mutable state beyond the static lexicons. The RNG is injected so tests can
//! pin probabilistic passes with a fixed seed while handlers use
//! `rand::thread_rng()`.

pub mod ai_score;
pub mod handlers;
pub mod lexicon;
pub mod stigma;
pub mod variation;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::humanize::ai_score::{check_ai_score, AiScoreResult};
use crate::humanize::stigma::replace_stigma_phrases;
use crate::humanize::variation::{
    apply_contractions, reduce_enthusiasm, reduce_formality_ru, vary_sentence_structure,
};
use crate::language::Language;

/// Result of the humanize-and-score workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumanizeOutcome {
    pub original: String,
    pub humanized: String,
    pub ai_score_before: AiScoreResult,
    pub ai_score_after: AiScoreResult,
}

/// Humanizes `text` for the given language.
///
/// Empty input is returned unchanged. Russian goes through its own path
/// (probabilistic stigma replacement when `apply_variations`, then the fixed
/// formality substitutions, always). Every other language runs stigma
/// replacement and contractions (both gated on `apply_variations`), the
/// reserved sentence-structure pass, and enthusiasm reduction (always).
pub fn humanize_text<R: Rng>(
    text: &str,
    language: Language,
    apply_variations: bool,
    rng: &mut R,
) -> String {
    if text.is_empty() {
        return text.to_string();
    }

    if language == Language::Ru {
        let mut result = text.to_string();
        if apply_variations {
            result = replace_stigma_phrases(&result, Language::Ru, rng);
        }
        return reduce_formality_ru(&result);
    }

    let mut result = text.to_string();
    if apply_variations {
        result = replace_stigma_phrases(&result, language, rng);
        result = apply_contractions(&result, rng);
    }
    result = vary_sentence_structure(&result);
    reduce_enthusiasm(&result)
}

/// Humanizes `text` and reports AI scores for both the original and the
/// rewritten text.
///
/// No monotonicity is promised per sample: the scorer is a heuristic, and a
/// given coin-flip sequence (or a non-English text) can leave the score
/// unchanged or worse.
pub fn humanize_with_scores<R: Rng>(
    text: &str,
    language: Language,
    apply_variations: bool,
    rng: &mut R,
) -> HumanizeOutcome {
    let ai_score_before = check_ai_score(text, language);
    let humanized = humanize_text(text, language, apply_variations, rng);
    let ai_score_after = check_ai_score(&humanized, language);

    HumanizeOutcome {
        original: text.to_string(),
        humanized,
        ai_score_before,
        ai_score_after,
    }
}

/// Uppercases the first character and lowercases the rest.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
