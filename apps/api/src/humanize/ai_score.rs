//! AI-likelihood scoring — a bounded 0–100 heuristic over buzzword density,
//! sentence-starter repetition, and punctuation patterns.
//!
//! Only English has scoring rules today; Russian (and the unknown-language
//! fallback, which maps to English upstream) returns the zero/empty result.
//! The asymmetry mirrors the product behavior and is deliberate — do not add
//! Russian rules here without a product decision.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::humanize::lexicon::EN_BUZZWORDS;
use crate::language::Language;

const BUZZWORD_DENSITY_THRESHOLD: f64 = 0.05;
const STARTER_DIVERSITY_THRESHOLD: f64 = 0.6;

/// AI-likelihood verdict for a piece of text.
///
/// `flags` and `suggestions` are parallel sequences in detection order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiScoreResult {
    /// 0–100; higher means more AI-like.
    pub score: u32,
    pub flags: Vec<String>,
    pub suggestions: Vec<String>,
    pub is_likely_ai: bool,
}

impl AiScoreResult {
    fn zero() -> Self {
        AiScoreResult {
            score: 0,
            flags: vec![],
            suggestions: vec![],
            is_likely_ai: false,
        }
    }
}

fn buzzword_regexes() -> &'static [Regex] {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        EN_BUZZWORDS
            .iter()
            .map(|word| {
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word)))
                    .expect("invalid buzzword regex")
            })
            .collect()
    })
}

fn sentence_split_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("invalid sentence split regex"))
}

/// Scores how AI-like `text` reads. Total over any input; empty text scores 0.
///
/// The four English rules are independent and cumulative: buzzword density
/// (+30), repetitive sentence starters (+20), excessive exclamation (+15),
/// and the "Dear Sir or Madam" opening (+10). The sum is capped at 100.
pub fn check_ai_score(text: &str, language: Language) -> AiScoreResult {
    if language != Language::En {
        return AiScoreResult::zero();
    }

    let mut score = 0u32;
    let mut flags = Vec::new();
    let mut suggestions = Vec::new();

    // Rule 1: buzzword density over whitespace-delimited words.
    let word_count = text.split_whitespace().count();
    if word_count > 0 {
        let buzzword_count: usize = buzzword_regexes()
            .iter()
            .map(|re| re.find_iter(text).count())
            .sum();
        let density = buzzword_count as f64 / word_count as f64;
        if density > BUZZWORD_DENSITY_THRESHOLD {
            score += 30;
            flags.push("High buzzword density".to_string());
            suggestions.push("Replace buzzwords with natural language".to_string());
        }
    }

    // Rule 2: repetitive sentence starters (first 10 chars as the key).
    let starters: Vec<String> = sentence_split_re()
        .split(text)
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.chars().take(10).collect())
            }
        })
        .collect();
    if starters.len() > 3 {
        let distinct: HashSet<&String> = starters.iter().collect();
        if (distinct.len() as f64) / (starters.len() as f64) < STARTER_DIVERSITY_THRESHOLD {
            score += 20;
            flags.push("Repetitive sentence structure".to_string());
            suggestions.push("Vary sentence beginnings".to_string());
        }
    }

    // Rule 3: excessive exclamation marks.
    if text.matches('!').count() > 2 {
        score += 15;
        flags.push("Excessive enthusiasm markers".to_string());
        suggestions.push("Reduce exclamation marks".to_string());
    }

    // Rule 4: the canonical over-formal opening.
    if text.contains("Dear Sir or Madam") {
        score += 10;
        flags.push("Overly formal opening".to_string());
        suggestions.push("Use more natural greeting".to_string());
    }

    let score = score.min(100);
    AiScoreResult {
        score,
        is_likely_ai: score > 50,
        flags,
        suggestions,
    }
}
