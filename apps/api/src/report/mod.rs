//! Reporting projections over finished `ScoreResult`s.
//!
//! Everything here is read-only: results arrive finalized from the orchestrator
//! and are only summarized or rendered.

pub mod csv;

use serde::{Deserialize, Serialize};

use crate::models::{ScoreResult, Verdict};
use crate::scoring::fusion::round2;

/// One resume's slice of the summed final scores, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreShare {
    pub resume_id: String,
    pub share: f64,
}

/// Session-level overview: verdict counts, ranking and score distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceSummary {
    pub total: usize,
    pub high_fit: usize,
    pub medium_fit: usize,
    pub low_fit: usize,
    pub average_final_score: f64,
    /// Resume ids by final score, best first. Ties keep input order.
    pub ranking: Vec<String>,
    pub score_shares: Vec<ScoreShare>,
}

pub fn summarize(results: &[ScoreResult]) -> RelevanceSummary {
    let count = |v: Verdict| results.iter().filter(|r| r.verdict == v).count();

    let total_score: f64 = results.iter().map(|r| r.final_score).sum();
    let average_final_score = if results.is_empty() {
        0.0
    } else {
        round2(total_score / results.len() as f64)
    };

    let mut ranked: Vec<&ScoreResult> = results.iter().collect();
    ranked.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let score_shares = results
        .iter()
        .map(|r| ScoreShare {
            resume_id: r.resume_id.clone(),
            share: if total_score > 0.0 {
                round1(r.final_score / total_score * 100.0)
            } else {
                0.0
            },
        })
        .collect();

    RelevanceSummary {
        total: results.len(),
        high_fit: count(Verdict::HighFit),
        medium_fit: count(Verdict::MediumFit),
        low_fit: count(Verdict::LowFit),
        average_final_score,
        ranking: ranked.into_iter().map(|r| r.resume_id.clone()).collect(),
        score_shares,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
