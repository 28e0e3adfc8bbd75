use anyhow::{Context, Result};

use crate::matching::vocabulary::DEFAULT_SKILLS;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Ordered skill phrases for the matching vocabulary. Overridden with a
    /// comma-separated `SKILL_VOCABULARY` value; defaults to the built-in
    /// ten-skill list.
    pub skill_vocabulary: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skill_vocabulary: match std::env::var("SKILL_VOCABULARY") {
                Ok(raw) => parse_vocabulary(&raw),
                Err(_) => DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Splits a comma-separated phrase list, trimming entries and dropping empty
/// ones. Canonicalization (lowercasing, dedup) happens in `SkillVocabulary`.
fn parse_vocabulary(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vocabulary_splits_and_trims() {
        assert_eq!(
            parse_vocabulary("rust, distributed systems ,sql"),
            ["rust", "distributed systems", "sql"]
        );
    }

    #[test]
    fn test_parse_vocabulary_drops_empty_entries() {
        assert_eq!(parse_vocabulary("python,,  ,java"), ["python", "java"]);
    }

    #[test]
    fn test_parse_vocabulary_empty_string() {
        assert!(parse_vocabulary("").is_empty());
    }
}
