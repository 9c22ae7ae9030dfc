use super::fusion::round2;
use super::normalizer::TokenSet;

/// Keywords reported per list unless configured otherwise.
pub const DEFAULT_KEYWORD_LIMIT: usize = 20;

/// Verbatim keyword overlap between a job description and a resume.
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalMatch {
    pub matched: TokenSet,
    pub missing: TokenSet,
    /// |matched| / max(1, |jd|) × 100, rounded to 2 decimals
    pub score: f64,
}

impl LexicalMatch {
    /// First `limit` matched keywords, in set order.
    pub fn matched_keywords(&self, limit: usize) -> Vec<String> {
        self.matched.iter().take(limit).cloned().collect()
    }

    /// First `limit` missing keywords, in set order.
    pub fn missing_keywords(&self, limit: usize) -> Vec<String> {
        self.missing.iter().take(limit).cloned().collect()
    }
}

/// Compares JD keywords against resume keywords.
///
/// An empty JD set scores 0; the denominator never drops below 1.
pub fn match_keywords(jd_tokens: &TokenSet, resume_tokens: &TokenSet) -> LexicalMatch {
    let matched: TokenSet = jd_tokens.intersection(resume_tokens).cloned().collect();
    let missing: TokenSet = jd_tokens.difference(resume_tokens).cloned().collect();

    let score = round2(matched.len() as f64 / jd_tokens.len().max(1) as f64 * 100.0);

    LexicalMatch {
        matched,
        missing,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::normalizer::normalize;

    #[test]
    fn test_half_of_jd_keywords_matched() {
        let jd = normalize("python sql machine learning");
        let resume = normalize("python java sql");

        let m = match_keywords(&jd, &resume);
        assert_eq!(m.score, 50.0);
        assert_eq!(m.matched, normalize("python sql"));
        assert_eq!(m.missing, normalize("machine learning"));
    }

    #[test]
    fn test_empty_jd_scores_zero() {
        let m = match_keywords(&TokenSet::new(), &normalize("python java"));
        assert_eq!(m.score, 0.0);
        assert!(m.matched.is_empty());
        assert!(m.missing.is_empty());
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let jd = normalize("rust tokio axum");
        let m = match_keywords(&jd, &TokenSet::new());
        assert_eq!(m.score, 0.0);
        assert_eq!(m.missing.len(), 3);
    }

    #[test]
    fn test_identical_sets_score_100() {
        let jd = normalize("rust tokio axum");
        let m = match_keywords(&jd, &jd);
        assert_eq!(m.score, 100.0);
        assert!(m.missing.is_empty());
    }

    #[test]
    fn test_score_rounded_to_two_decimals() {
        let jd = normalize("a b c");
        let m = match_keywords(&jd, &normalize("a"));
        assert_eq!(m.score, 33.33);
    }

    #[test]
    fn test_extra_resume_keywords_do_not_raise_score() {
        let jd = normalize("rust go");
        let m = match_keywords(&jd, &normalize("rust java kotlin scala"));
        assert_eq!(m.score, 50.0);
        assert!(!m.matched.contains("java"));
    }

    #[test]
    fn test_keyword_lists_are_capped() {
        let jd_text: Vec<String> = (0..30).map(|i| format!("kw{i}")).collect();
        let resume_text: Vec<String> = (0..25).map(|i| format!("kw{i}")).collect();
        let m = match_keywords(&normalize(&jd_text.join(" ")), &normalize(&resume_text.join(" ")));

        let matched = m.matched_keywords(DEFAULT_KEYWORD_LIMIT);
        let missing = m.missing_keywords(DEFAULT_KEYWORD_LIMIT);
        assert_eq!(matched.len(), 20);
        assert_eq!(missing.len(), 5);
        assert!(matched.iter().all(|k| m.matched.contains(k)));
        assert!(missing.iter().all(|k| m.missing.contains(k)));
    }
}
