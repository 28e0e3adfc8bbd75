//! Persistence of ranked results.
//!
//! A failed insert never invalidates the computed ranking: each record is
//! written on its own, failures are logged and reported back per-record, and
//! the caller still gets the full ranked list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::warn;

use crate::matching::MatchResult;

/// One saved row from the `resumes` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRecordRow {
    pub id: i64,
    pub name: String,
    pub jd_text: String,
    pub resume_text: String,
    /// Comma-joined matched skill phrases.
    pub matched_skills: String,
    pub score: f64,
    pub created_at: DateTime<Utc>,
}

/// A record that could not be persisted. The ranking itself still stands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistFailure {
    pub resume: String,
    pub reason: String,
}

/// Saves one row per ranked resume. Returns the per-record failures; an
/// empty vector means everything was written.
pub async fn save_results(
    pool: &PgPool,
    jd_text: &str,
    results: &[MatchResult],
    resume_texts: &[(String, String)],
) -> Vec<PersistFailure> {
    let mut failures = Vec::new();
    for result in results {
        let resume_text = resume_texts
            .iter()
            .find(|(name, _)| *name == result.resume)
            .map(|(_, text)| text.as_str())
            .unwrap_or_default();

        let outcome = sqlx::query(
            "INSERT INTO resumes (name, jd_text, resume_text, matched_skills, score) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&result.resume)
        .bind(jd_text)
        .bind(resume_text)
        .bind(result.matched_skills.join(","))
        .bind(result.final_score)
        .execute(pool)
        .await;

        if let Err(e) = outcome {
            warn!(resume = %result.resume, error = %e, "failed to persist ranked resume");
            failures.push(PersistFailure {
                resume: result.resume.clone(),
                reason: e.to_string(),
            });
        }
    }
    failures
}

/// All saved records, best score first.
pub async fn fetch_saved(pool: &PgPool) -> Result<Vec<ResumeRecordRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRecordRow>("SELECT * FROM resumes ORDER BY score DESC")
        .fetch_all(pool)
        .await
}
