//! Static lexicons for the humanization pipeline.
//!
//! Every table is an ORDERED slice, not a map. Later phrase passes run on the
//! output of earlier ones, so when phrases overlap textually the definition
//! order below is part of the observable behavior. Do not reorder casually.

/// English AI-stigma phrases and their natural alternatives.
pub const EN_STIGMA_PHRASES: &[(&str, &[&str])] = &[
    ("leverage", &["use", "apply", "employ", "work with"]),
    ("utilize", &["use", "employ", "apply"]),
    ("robust", &["strong", "reliable", "solid", "effective"]),
    ("cutting-edge", &["modern", "latest", "current", "advanced"]),
    ("state-of-the-art", &["modern", "advanced", "latest"]),
    ("seamlessly", &["smoothly", "effectively", "efficiently"]),
    ("synergy", &["cooperation", "collaboration", "teamwork"]),
    ("paradigm", &["approach", "model", "framework"]),
    ("proactive", &["forward-thinking", "active", "initiative-driven"]),
    ("game-changer", &["breakthrough", "innovation", "advancement"]),
    ("touch base", &["contact", "reach out", "connect"]),
    ("circle back", &["return to", "follow up on", "revisit"]),
    ("deep dive", &["detailed analysis", "thorough review", "close look"]),
];

/// Russian AI-stigma phrases. Replacement is probabilistic (0.5 per
/// occurrence), so some instances survive — intentional.
pub const RU_STIGMA_PHRASES: &[(&str, &[&str])] = &[
    ("использовать", &["применять", "работать с", "применить"]),
    (
        "эффективный",
        &["результативный", "продуктивный", "успешный", "действенный"],
    ),
    (
        "инновационный",
        &["современный", "передовой", "новый", "актуальный"],
    ),
    (
        "оптимизировать",
        &["улучшить", "доработать", "усовершенствовать", "настроить"],
    ),
    ("осуществлять", &["выполнять", "проводить", "делать"]),
    ("реализовать", &["выполнить", "сделать", "создать"]),
    ("уникальный", &["особенный", "отличительный", "своеобразный"]),
    ("квалифицированный", &["опытный", "компетентный", "знающий"]),
    ("высококачественный", &["качественный", "надежный", "хороший"]),
    ("многофункциональный", &["универсальный", "гибкий"]),
];

/// Formal → casual contraction pairs for the English variation pass.
pub const EN_CONTRACTIONS: &[(&str, &str)] = &[
    ("I am", "I'm"),
    ("I have", "I've"),
    ("I would", "I'd"),
    ("cannot", "can't"),
    ("do not", "don't"),
    ("will not", "won't"),
];

/// Literal Russian formality substitutions, applied unconditionally in order.
pub const RU_FORMALITY_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("Глубокоуважаемый", "Уважаемый"),
    ("С глубоким уважением", "С уважением"),
    ("выражаю заинтересованность", "меня заинтересовала"),
    ("хотел бы выразить", "хочу выразить"),
    ("имею глубокие знания", "имею хорошие знания"),
];

/// Buzzwords counted by the English AI-score heuristic.
pub const EN_BUZZWORDS: &[&str] = &[
    "leverage",
    "utilize",
    "robust",
    "cutting-edge",
    "state-of-the-art",
    "seamlessly",
    "synergy",
    "paradigm",
    "proactive",
    "game-changer",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_stigma_phrase_has_alternatives() {
        for (phrase, alternatives) in EN_STIGMA_PHRASES.iter().chain(RU_STIGMA_PHRASES) {
            assert!(
                (2..=4).contains(&alternatives.len()),
                "{phrase} has {} alternatives, expected 2-4",
                alternatives.len()
            );
        }
    }

    #[test]
    fn test_stigma_phrases_are_lowercase() {
        for (phrase, _) in EN_STIGMA_PHRASES.iter().chain(RU_STIGMA_PHRASES) {
            assert_eq!(
                *phrase,
                phrase.to_lowercase(),
                "lexicon keys must be lowercase"
            );
        }
    }

    #[test]
    fn test_buzzword_list_has_ten_entries() {
        assert_eq!(EN_BUZZWORDS.len(), 10);
    }

    #[test]
    fn test_no_alternative_is_itself_a_stigma() {
        for (_, alternatives) in EN_STIGMA_PHRASES {
            for alt in *alternatives {
                assert!(
                    !EN_BUZZWORDS.contains(alt),
                    "alternative {alt} is itself a buzzword"
                );
            }
        }
    }
}
