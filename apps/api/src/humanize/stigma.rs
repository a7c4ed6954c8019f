//! Stigma replacement — rewrites "AI-sounding" vocabulary to natural alternatives.
//!
//! Phrases are processed in lexicon order, and each phrase pass scans the
//! CURRENT text (including edits from earlier passes). Within one pass,
//! replacements are spliced from the last match to the first so that match
//! offsets computed up front stay valid.

use std::sync::OnceLock;

use rand::Rng;
use regex::Regex;

use crate::humanize::capitalize;
use crate::humanize::lexicon::{EN_STIGMA_PHRASES, RU_STIGMA_PHRASES};
use crate::language::Language;

/// Per-occurrence replacement probability for Russian. English replaces
/// every occurrence unconditionally.
const RU_REPLACE_PROBABILITY: f64 = 0.5;

fn compile_word_regexes(phrases: &[(&str, &[&str])]) -> Vec<Regex> {
    phrases
        .iter()
        .map(|(phrase, _)| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase)))
                .expect("invalid stigma phrase regex")
        })
        .collect()
}

fn en_regexes() -> &'static [Regex] {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| compile_word_regexes(EN_STIGMA_PHRASES))
}

fn ru_regexes() -> &'static [Regex] {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| compile_word_regexes(RU_STIGMA_PHRASES))
}

/// Replaces whole-word, case-insensitive stigma phrase occurrences with a
/// randomly chosen natural alternative, adapting case to the matched span.
///
/// English: every occurrence is replaced. Russian: each occurrence is
/// replaced independently with probability 0.5, so some instances survive —
/// that is intended behavior, not a missed match.
pub fn replace_stigma_phrases<R: Rng>(text: &str, language: Language, rng: &mut R) -> String {
    let (lexicon, regexes, probability) = match language {
        Language::En => (EN_STIGMA_PHRASES, en_regexes(), 1.0),
        Language::Ru => (RU_STIGMA_PHRASES, ru_regexes(), RU_REPLACE_PROBABILITY),
    };

    let mut result = text.to_string();

    for ((_, alternatives), re) in lexicon.iter().zip(regexes) {
        let matches: Vec<(usize, usize, String)> = re
            .find_iter(&result)
            .map(|m| (m.start(), m.end(), m.as_str().to_string()))
            .collect();

        // Reverse order keeps earlier offsets valid after each splice.
        for (start, end, matched) in matches.into_iter().rev() {
            if probability < 1.0 && !rng.gen_bool(probability) {
                continue;
            }
            let alternative = alternatives[rng.gen_range(0..alternatives.len())];
            let replacement = adapt_case(alternative, &matched);
            result.replace_range(start..end, &replacement);
        }
    }

    result
}

/// Adapts `replacement` to the casing of the span it replaces: an all-caps
/// match yields an all-caps replacement, a capitalized match a capitalized
/// one, anything else the alternative verbatim.
fn adapt_case(replacement: &str, matched: &str) -> String {
    let has_upper = matched.chars().any(|c| c.is_uppercase());
    let has_lower = matched.chars().any(|c| c.is_lowercase());

    if has_upper && !has_lower {
        replacement.to_uppercase()
    } else if matched.chars().next().is_some_and(|c| c.is_uppercase()) {
        capitalize(replacement)
    } else {
        replacement.to_string()
    }
}
