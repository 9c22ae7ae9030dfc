use std::str::FromStr;

use anyhow::{Context, Result};

use crate::scoring::fusion::FusionWeights;
use crate::scoring::lexical::DEFAULT_KEYWORD_LIMIT;
use crate::scoring::orchestrator::ScoringOptions;

/// Application configuration loaded from environment variables.
/// Fails at startup if a value is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// "hash" (local, deterministic) or "http" (OpenAI-compatible endpoint)
    pub embedding_backend: String,
    pub embedding_api_url: Option<String>,
    pub embedding_api_key: Option<String>,
    pub embedding_model: String,
    pub embedding_dimension: usize,
    pub embedding_timeout_secs: u64,
    pub lexical_weight: f64,
    pub semantic_weight: f64,
    pub keyword_limit: usize,
    pub max_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            embedding_backend: std::env::var("EMBEDDING_BACKEND")
                .unwrap_or_else(|_| "hash".to_string()),
            embedding_api_url: optional_env("EMBEDDING_API_URL"),
            embedding_api_key: optional_env("EMBEDDING_API_KEY"),
            embedding_model: std::env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| "all-MiniLM-L6-v2".to_string()),
            embedding_dimension: env_or("EMBEDDING_DIMENSION", 384)?,
            embedding_timeout_secs: env_or("EMBEDDING_TIMEOUT_SECS", 60)?,
            lexical_weight: env_or("SCORING_LEXICAL_WEIGHT", 0.6)?,
            semantic_weight: env_or("SCORING_SEMANTIC_WEIGHT", 0.4)?,
            keyword_limit: env_or("SCORING_KEYWORD_LIMIT", DEFAULT_KEYWORD_LIMIT)?,
            max_concurrency: env_or("SCORING_MAX_CONCURRENCY", 4)?,
        })
    }

    /// Scoring options derived from config. Rejects weights that do not sum to 1.
    pub fn scoring_options(&self) -> Result<ScoringOptions> {
        let weights = FusionWeights::new(self.lexical_weight, self.semantic_weight)
            .context("SCORING_LEXICAL_WEIGHT / SCORING_SEMANTIC_WEIGHT")?;
        Ok(ScoringOptions {
            weights,
            keyword_limit: self.keyword_limit,
            max_concurrency: self.max_concurrency.max(1),
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            embedding_backend: "hash".to_string(),
            embedding_api_url: None,
            embedding_api_key: None,
            embedding_model: "all-MiniLM-L6-v2".to_string(),
            embedding_dimension: 64,
            embedding_timeout_secs: 5,
            lexical_weight: 0.6,
            semantic_weight: 0.4,
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
            max_concurrency: 2,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
