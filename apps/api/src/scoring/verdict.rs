use crate::models::Verdict;

/// Above this a resume is a high fit.
pub const HIGH_FIT_THRESHOLD: f64 = 70.0;
/// Above this (and up to `HIGH_FIT_THRESHOLD`) a resume is a medium fit.
pub const MEDIUM_FIT_THRESHOLD: f64 = 40.0;

/// Maps a final score to a verdict. Both thresholds are exclusive.
pub fn classify(final_score: f64) -> Verdict {
    if final_score > HIGH_FIT_THRESHOLD {
        Verdict::HighFit
    } else if final_score > MEDIUM_FIT_THRESHOLD {
        Verdict::MediumFit
    } else {
        Verdict::LowFit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_70_is_medium() {
        assert_eq!(classify(70.0), Verdict::MediumFit);
    }

    #[test]
    fn test_just_above_70_is_high() {
        assert_eq!(classify(70.01), Verdict::HighFit);
    }

    #[test]
    fn test_exactly_40_is_low() {
        assert_eq!(classify(40.0), Verdict::LowFit);
    }

    #[test]
    fn test_just_above_40_is_medium() {
        assert_eq!(classify(40.01), Verdict::MediumFit);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(100.0), Verdict::HighFit);
        assert_eq!(classify(0.0), Verdict::LowFit);
        assert_eq!(classify(-5.0), Verdict::LowFit);
        assert_eq!(classify(250.0), Verdict::HighFit);
    }
}
