//! Keyword extraction — pulls technology/skill keywords out of free-form text.
//!
//! Two passes feed one deduplicated set:
//! 1. a lexicon pass that maps known variants to canonical display forms
//!    (`"k8s"` → `"Kubernetes"`), matched as substrings of the lowercased text;
//! 2. a structural pass over the original-case text that picks up capitalized
//!    word chains, acronyms, and `name.ext` source-file tokens verbatim.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

/// Known technology variants and their canonical display forms.
///
/// Ordered slice, not a map: iteration order is stable and the canonical
/// casing ("PostgreSQL", "CI/CD") is what ends up in the keyword set.
pub const TECH_LEXICON: &[(&str, &str)] = &[
    ("python", "Python"),
    ("java", "Java"),
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("react", "React"),
    ("vue", "Vue"),
    ("angular", "Angular"),
    ("fastapi", "FastAPI"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("spring", "Spring"),
    ("spring boot", "Spring Boot"),
    ("postgresql", "PostgreSQL"),
    ("postgres", "PostgreSQL"),
    ("mysql", "MySQL"),
    ("mongodb", "MongoDB"),
    ("redis", "Redis"),
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
    ("k8s", "Kubernetes"),
    ("aws", "AWS"),
    ("azure", "Azure"),
    ("gcp", "GCP"),
    ("git", "Git"),
    ("github", "GitHub"),
    ("gitlab", "GitLab"),
    ("ci/cd", "CI/CD"),
    ("cicd", "CI/CD"),
    ("rest", "REST"),
    ("graphql", "GraphQL"),
    ("microservices", "Microservices"),
    ("api", "API"),
    ("sql", "SQL"),
    ("nosql", "NoSQL"),
    ("linux", "Linux"),
    ("unix", "Unix"),
    ("agile", "Agile"),
    ("scrum", "Scrum"),
];

/// Chains of capitalized words ("Spring Boot", "Machine Learning").
fn capitalized_chain_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").expect("invalid capitalized-chain regex")
    })
}

/// All-uppercase acronyms of length >= 2 ("AWS", "SQL").
fn acronym_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[A-Z]{2,}\b").expect("invalid acronym regex"))
}

/// Source-file tokens like "main.py" or "server.js".
fn file_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b\w+\.(?:js|ts|py|java|go|rs|rb)\b").expect("invalid file-token regex")
    })
}

/// Extracts a deduplicated set of technology/skill keywords from `text`.
///
/// Total over any input; empty text yields an empty set. Lexicon hits are
/// canonicalized, structural hits are kept in their original casing — the two
/// paths intentionally do not share normalization.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    let mut keywords = BTreeSet::new();
    if text.is_empty() {
        return keywords;
    }

    let text_lower = text.to_lowercase();

    for (variant, canonical) in TECH_LEXICON {
        if text_lower.contains(variant) || text_lower.contains(&canonical.to_lowercase()) {
            keywords.insert((*canonical).to_string());
        }
    }

    for re in [capitalized_chain_re(), acronym_re(), file_token_re()] {
        for m in re.find_iter(text) {
            // Very short matches ("Go", "It") are noise, not keywords.
            if m.as_str().chars().count() > 2 {
                keywords.insert(m.as_str().to_string());
            }
        }
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(extract_keywords("").is_empty());
    }

    #[test]
    fn test_lexicon_variant_maps_to_canonical() {
        let keywords = extract_keywords("we run postgres and k8s in production");
        assert!(keywords.contains("PostgreSQL"));
        assert!(keywords.contains("Kubernetes"));
        // Canonical casing, not the raw variant
        assert!(!keywords.contains("postgres"));
        assert!(!keywords.contains("k8s"));
    }

    #[test]
    fn test_lexicon_matches_canonical_spelling_too() {
        let keywords = extract_keywords("Experience with FastAPI and GraphQL required.");
        assert!(keywords.contains("FastAPI"));
        assert!(keywords.contains("GraphQL"));
    }

    #[test]
    fn test_capitalized_chain_extracted_verbatim() {
        let keywords = extract_keywords("Built services with Spring Boot on Linux.");
        assert!(keywords.contains("Spring Boot"));
    }

    #[test]
    fn test_acronyms_of_three_or_more_letters_extracted() {
        let keywords = extract_keywords("Deployed to AWS behind a CDN");
        assert!(keywords.contains("AWS"));
        assert!(keywords.contains("CDN"));
    }

    #[test]
    fn test_two_letter_tokens_filtered_out() {
        // "Go" (capitalized) and "CI" (acronym) are <= 2 chars on the
        // structural path; "Go" is also not in the lexicon.
        let keywords = extract_keywords("CI Go");
        assert!(!keywords.contains("Go"));
        assert!(!keywords.contains("CI"));
    }

    #[test]
    fn test_file_extension_tokens_extracted() {
        let keywords = extract_keywords("entry point is server.py next to worker.js");
        assert!(keywords.contains("server.py"));
        assert!(keywords.contains("worker.js"));
    }

    #[test]
    fn test_structural_path_preserves_original_case() {
        let keywords = extract_keywords("Kafka streams everywhere");
        // Not in the lexicon — comes through the capitalized-word pattern as-is.
        assert!(keywords.contains("Kafka"));
        assert!(!keywords.contains("kafka"));
    }

    #[test]
    fn test_result_is_deduplicated() {
        let keywords = extract_keywords("Docker docker DOCKER docker");
        let docker_entries = keywords.iter().filter(|k| *k == "Docker").count();
        assert_eq!(docker_entries, 1);
    }

    #[test]
    fn test_typical_resume_blurb() {
        let keywords =
            extract_keywords("Python developer experienced with FastAPI and PostgreSQL.");
        assert!(keywords.contains("Python"));
        assert!(keywords.contains("FastAPI"));
        assert!(keywords.contains("PostgreSQL"));
    }
}
