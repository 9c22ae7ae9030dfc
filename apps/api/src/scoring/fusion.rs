use serde::{Deserialize, Serialize};

use super::ScoringError;

/// Tolerance when checking that weights sum to 1.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Rounds to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Lexical/semantic blend used for the final score. Defaults to 0.6 / 0.4.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionWeights {
    pub lexical: f64,
    pub semantic: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            lexical: 0.6,
            semantic: 0.4,
        }
    }
}

impl FusionWeights {
    /// Builds weights, rejecting values outside [0, 1] or not summing to 1.
    pub fn new(lexical: f64, semantic: f64) -> Result<Self, ScoringError> {
        let in_range = |w: f64| (0.0..=1.0).contains(&w);
        if !in_range(lexical)
            || !in_range(semantic)
            || ((lexical + semantic) - 1.0).abs() > WEIGHT_SUM_TOLERANCE
        {
            return Err(ScoringError::InvalidWeights { lexical, semantic });
        }
        Ok(Self { lexical, semantic })
    }

    /// `round(lexical * w_lex + semantic * w_sem, 2)`
    pub fn fuse(&self, lexical: f64, semantic: f64) -> f64 {
        round2(lexical * self.lexical + semantic * self.semantic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_fuse() {
        let w = FusionWeights::default();
        assert_eq!(w.fuse(50.0, 80.0), 62.0);
        assert_eq!(w.fuse(100.0, 100.0), 100.0);
        assert_eq!(w.fuse(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_fuse_rounds_to_two_decimals() {
        // 33.33 * 0.6 + 12.35 * 0.4 = 19.998 + 4.94 = 24.938
        assert_eq!(FusionWeights::default().fuse(33.33, 12.35), 24.94);
    }

    #[test]
    fn test_custom_weights() {
        let w = FusionWeights::new(0.5, 0.5).unwrap();
        assert_eq!(w.fuse(40.0, 80.0), 60.0);
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        assert!(matches!(
            FusionWeights::new(0.7, 0.4),
            Err(ScoringError::InvalidWeights { .. })
        ));
    }

    #[test]
    fn test_weights_must_be_in_unit_range() {
        assert!(FusionWeights::new(1.5, -0.5).is_err());
    }

    #[test]
    fn test_edge_weights_accepted() {
        let w = FusionWeights::new(1.0, 0.0).unwrap();
        assert_eq!(w.fuse(42.5, 99.0), 42.5);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(62.004), 62.0);
        assert_eq!(round2(62.006), 62.01);
        assert_eq!(round2(0.0), 0.0);
    }
}
