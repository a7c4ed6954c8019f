//! Secondary style variations: contractions, enthusiasm damping, and the
//! Russian formality reductions.

use std::sync::OnceLock;

use rand::Rng;
use regex::{Captures, Regex};

use crate::humanize::capitalize;
use crate::humanize::lexicon::{EN_CONTRACTIONS, RU_FORMALITY_SUBSTITUTIONS};

/// Chance that any single formal phrase occurrence is contracted.
const CONTRACTION_PROBABILITY: f64 = 0.3;

fn contraction_regexes() -> &'static [Regex] {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        EN_CONTRACTIONS
            .iter()
            .map(|(formal, _)| {
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(formal)))
                    .expect("invalid contraction regex")
            })
            .collect()
    })
}

/// Runs of 3+ uppercase letters — shouty emphasis, but also real acronyms.
fn caps_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[A-Z]{3,}\b").expect("invalid caps-run regex"))
}

/// English-only contraction pass: each whole-word match of a formal phrase
/// becomes its casual form with probability 0.3, independently per
/// occurrence, spliced in reverse-match order per phrase.
pub fn apply_contractions<R: Rng>(text: &str, rng: &mut R) -> String {
    let mut result = text.to_string();

    for ((_, casual), re) in EN_CONTRACTIONS.iter().zip(contraction_regexes()) {
        let spans: Vec<(usize, usize)> = re
            .find_iter(&result)
            .map(|m| (m.start(), m.end()))
            .collect();

        for (start, end) in spans.into_iter().rev() {
            if rng.gen_bool(CONTRACTION_PROBABILITY) {
                result.replace_range(start..end, casual);
            }
        }
    }

    result
}

/// Caps each blank-line-delimited paragraph at one `!`.
///
/// A paragraph with more than one `!` is rebuilt from its `!`-split pieces:
/// the first piece keeps its `!`, every later non-blank piece is re-attached
/// behind a `.`. Afterwards any 3+ letter all-caps run is rewritten to
/// capitalized form — this also mangles legitimate acronyms ("AWS" → "Aws"),
/// a known limitation of the heuristic that callers accept.
pub fn reduce_enthusiasm(text: &str) -> String {
    let paragraphs: Vec<String> = text
        .split("\n\n")
        .map(|para| {
            if para.matches('!').count() > 1 {
                let pieces: Vec<&str> = para.split('!').collect();
                let mut rebuilt = String::with_capacity(para.len());
                rebuilt.push_str(pieces[0]);
                rebuilt.push('!');
                for piece in &pieces[1..] {
                    if !piece.trim().is_empty() {
                        rebuilt.push('.');
                        rebuilt.push_str(piece);
                    }
                }
                rebuilt
            } else {
                para.to_string()
            }
        })
        .collect();

    let result = paragraphs.join("\n\n");

    caps_run_re()
        .replace_all(&result, |caps: &Captures| capitalize(&caps[0]))
        .into_owned()
}

/// Reserved pass for breaking up repetitive sentence openings. Detection
/// lives in the AI-score heuristic; rewriting is intentionally not done yet,
/// so the text passes through unchanged.
pub fn vary_sentence_structure(text: &str) -> String {
    text.to_string()
}

/// Russian formality reduction: fixed literal substitutions, applied
/// unconditionally in table order across the whole text.
pub fn reduce_formality_ru(text: &str) -> String {
    let mut result = text.to_string();
    for (formal, casual) in RU_FORMALITY_SUBSTITUTIONS {
        result = result.replace(formal, casual);
    }
    result
}
