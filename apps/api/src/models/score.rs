use serde::{Deserialize, Serialize};

/// Ordinal fit category derived from a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    HighFit,
    MediumFit,
    LowFit,
}

impl Verdict {
    /// Human-readable label used by reports and exports.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::HighFit => "High Fit",
            Verdict::MediumFit => "Medium Fit",
            Verdict::LowFit => "Low Fit",
        }
    }
}

/// Relevance of one resume against the session's job description.
///
/// Built once by the orchestrator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub resume_id: String,
    pub lexical_score: f64,  // 0 – 100
    pub semantic_score: f64, // 0 – 100, clamped
    pub final_score: f64,    // 0 – 100
    pub verdict: Verdict,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_serde_uses_variant_names() {
        assert_eq!(serde_json::to_string(&Verdict::HighFit).unwrap(), r#""HighFit""#);
        let v: Verdict = serde_json::from_str(r#""LowFit""#).unwrap();
        assert_eq!(v, Verdict::LowFit);
    }

    #[test]
    fn test_verdict_labels() {
        assert_eq!(Verdict::HighFit.label(), "High Fit");
        assert_eq!(Verdict::MediumFit.label(), "Medium Fit");
        assert_eq!(Verdict::LowFit.label(), "Low Fit");
    }
}
