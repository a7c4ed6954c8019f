//! Coverage scoring — how much of a job description's keyword set a resume covers.

use serde::{Deserialize, Serialize};

use crate::analysis::keywords::extract_keywords;

/// Keyword coverage of a resume against a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageResult {
    /// Keywords present in both texts, lexicographically sorted.
    pub matched: Vec<String>,
    /// JD keywords absent from the resume, lexicographically sorted.
    pub missing: Vec<String>,
    /// `|matched| / |jd keywords|`, rounded to 2 decimal places.
    pub score: f64,
    pub total_jd_keywords: usize,
    pub total_resume_keywords: usize,
}

/// Computes keyword coverage between a resume and a job description.
///
/// Never fails: empty or degenerate inputs produce empty keyword sets, and an
/// empty JD keyword set yields a score of exactly `0.0` rather than a
/// division error.
///
/// Rounding: the score is rounded half-away-from-zero to 2 decimal places
/// (`(x * 100).round() / 100`). A JD/resume pair landing exactly on a half
/// boundary (e.g. 1/8 = 0.125) therefore reports 0.13, not the 0.12 that
/// round-half-to-even would give.
pub fn compute_coverage(resume_text: &str, job_description: &str) -> CoverageResult {
    let resume_keywords = extract_keywords(resume_text);
    let jd_keywords = extract_keywords(job_description);

    // BTreeSet iteration is already lexicographic, so both lists come out sorted.
    let matched: Vec<String> = jd_keywords.intersection(&resume_keywords).cloned().collect();
    let missing: Vec<String> = jd_keywords.difference(&resume_keywords).cloned().collect();

    let score = if jd_keywords.is_empty() {
        0.0
    } else {
        round2(matched.len() as f64 / jd_keywords.len() as f64)
    };

    CoverageResult {
        matched,
        missing,
        score,
        total_jd_keywords: jd_keywords.len(),
        total_resume_keywords: resume_keywords.len(),
    }
}

/// Rounds half-away-from-zero to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_full_coverage() {
        let text = "Python developer with FastAPI and PostgreSQL.";
        let result = compute_coverage(text, text);
        assert_eq!(result.score, 1.0);
        assert!(result.missing.is_empty());
        assert_eq!(result.matched.len(), result.total_jd_keywords);
    }

    #[test]
    fn test_matched_and_missing_partition_jd_keywords() {
        let resume = "Python developer experienced with FastAPI and PostgreSQL.";
        let jd = "Python developer with FastAPI, PostgreSQL and Kubernetes.";
        let result = compute_coverage(resume, jd);

        for kw in ["Python", "FastAPI", "PostgreSQL"] {
            assert!(
                result.matched.iter().any(|m| m == kw),
                "expected {kw} in matched, got {:?}",
                result.matched
            );
        }
        assert!(result.missing.iter().any(|m| m == "Kubernetes"));
        assert_eq!(
            result.matched.len() + result.missing.len(),
            result.total_jd_keywords
        );
    }

    #[test]
    fn test_empty_jd_scores_zero_without_panicking() {
        let result = compute_coverage("Python and Docker experience", "");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.total_jd_keywords, 0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let result = compute_coverage("", "Required: Docker and Redis.");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.total_resume_keywords, 0);
        assert_eq!(result.missing.len(), result.total_jd_keywords);
    }

    #[test]
    fn test_both_empty_is_a_no_op() {
        let result = compute_coverage("", "");
        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_score_is_always_within_unit_interval() {
        let cases = [
            ("", ""),
            ("Python", "Java"),
            ("Python Java Docker Redis", "Python"),
            ("x", "Required: Python, Java, Docker, Redis, AWS, GCP, Azure."),
        ];
        for (resume, jd) in cases {
            let result = compute_coverage(resume, jd);
            assert!(
                (0.0..=1.0).contains(&result.score),
                "score {} out of bounds for ({resume:?}, {jd:?})",
                result.score
            );
        }
    }

    #[test]
    fn test_output_lists_are_sorted() {
        let result = compute_coverage(
            "Docker and Python here",
            "Zookeeper, Docker, Python, Ansible, Redis required",
        );
        let mut sorted_matched = result.matched.clone();
        sorted_matched.sort();
        assert_eq!(result.matched, sorted_matched);
        let mut sorted_missing = result.missing.clone();
        sorted_missing.sort();
        assert_eq!(result.missing, sorted_missing);
    }

    /// Pins the rounding mode: half-away-from-zero, not banker's rounding.
    #[test]
    fn test_round2_rounds_half_away_from_zero() {
        // 0.125 is exactly representable, so this genuinely exercises the
        // half case; Python's banker's rounding would give 0.12 here.
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(0.333333), 0.33);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn test_score_rounded_to_two_decimals() {
        let result = compute_coverage("Python is fine", "Python, Java and Docker wanted");
        // Whatever the extracted sets are, the score must carry at most
        // 2 decimal places.
        let scaled = result.score * 100.0;
        assert!(
            (scaled - scaled.round()).abs() < 1e-9,
            "score {} not rounded to 2 decimals",
            result.score
        );
    }
}
