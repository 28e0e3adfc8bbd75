use bytes::Bytes;
use serde::Serialize;

use crate::matching::MatchResult;
use crate::store::PersistFailure;

/// One uploaded file as received from the multipart form.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// A document dropped from the batch, with the extraction failure that
/// caused it.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedDocument {
    pub name: String,
    pub reason: String,
}

/// Full ranking outcome returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct RankingResponse {
    /// Ranked results, best final score first.
    pub results: Vec<MatchResult>,
    /// Resumes skipped because their text could not be extracted.
    pub skipped: Vec<SkippedDocument>,
    /// Records the store rejected. The ranking above is still valid.
    pub persist_failures: Vec<PersistFailure>,
    /// Set when there was nothing to rank (no job description or no usable
    /// resumes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl RankingResponse {
    pub fn nothing_to_rank(note: &str, skipped: Vec<SkippedDocument>) -> Self {
        Self {
            results: Vec::new(),
            skipped,
            persist_failures: Vec::new(),
            note: Some(note.to_string()),
        }
    }
}
