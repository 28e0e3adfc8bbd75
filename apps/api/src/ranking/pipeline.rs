//! Orchestration of one ranking request: extraction, matching, persistence.
//!
//! The compute step is synchronous and store-free so it can be tested with
//! in-memory fixtures; only persistence touches the database.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::{ExtractionError, ExtractorRegistry};
use crate::matching::{normalize, rank, similarity, MatchResult, ScoredDocument, SkillVocabulary};
use crate::ranking::models::{RankingResponse, SkippedDocument, UploadedDocument};
use crate::state::AppState;
use crate::store;

/// Everything the compute step produces. `resume_texts` keeps the normalized
/// text per identifier for persistence.
#[derive(Debug)]
pub struct ComputedRanking {
    pub jd_text: String,
    pub results: Vec<MatchResult>,
    pub skipped: Vec<SkippedDocument>,
    pub resume_texts: Vec<(String, String)>,
}

/// Extracts, normalizes, and ranks. Pure with respect to its inputs.
///
/// A resume whose text cannot be extracted is skipped and reported; it never
/// aborts the batch. A job description that cannot be extracted is a
/// validation error, since nothing can be ranked against it.
pub fn compute_ranking(
    vocabulary: &SkillVocabulary,
    extractors: &ExtractorRegistry,
    jd: &UploadedDocument,
    resumes: &[UploadedDocument],
) -> Result<ComputedRanking, AppError> {
    let jd_raw = extractors
        .for_document(jd.content_type.as_deref(), &jd.name)
        .extract(&jd.bytes)
        .map_err(|e| {
            let message = format!("job description '{}': {e}", jd.name);
            match e {
                ExtractionError::InputDecoding(_) => AppError::InputDecoding(message),
                ExtractionError::Malformed { .. } => AppError::Validation(message),
            }
        })?;
    let jd_text = normalize(&jd_raw);
    let job_skills = vocabulary.extract_skills(&jd_text);

    let mut skipped = Vec::new();
    let mut docs: Vec<ScoredDocument> = Vec::new();
    let mut texts: Vec<String> = Vec::new();
    for resume in resumes {
        let extractor = extractors.for_document(resume.content_type.as_deref(), &resume.name);
        match extractor.extract(&resume.bytes) {
            Ok(raw) => {
                let text = normalize(&raw);
                docs.push(ScoredDocument {
                    id: resume.name.clone(),
                    skills: vocabulary.extract_skills(&text),
                });
                texts.push(text);
            }
            Err(e) => {
                warn!(resume = %resume.name, error = %e, "skipping resume");
                skipped.push(SkippedDocument {
                    name: resume.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    let similarities = similarity(&jd_text, &texts);
    let results = rank(&job_skills, &docs, &similarities);
    let resume_texts = docs
        .into_iter()
        .map(|d| d.id)
        .zip(texts)
        .collect();

    Ok(ComputedRanking {
        jd_text,
        results,
        skipped,
        resume_texts,
    })
}

/// Full request path: compute, persist, assemble the response.
///
/// Missing input short-circuits to a "nothing to rank" response rather than
/// an error; persistence failures are reported per-record alongside the
/// still-valid ranking.
pub async fn run_ranking(
    state: &AppState,
    jd: Option<UploadedDocument>,
    resumes: Vec<UploadedDocument>,
) -> Result<RankingResponse, AppError> {
    let Some(jd) = jd else {
        return Ok(RankingResponse::nothing_to_rank(
            "no job description uploaded",
            Vec::new(),
        ));
    };
    if resumes.is_empty() {
        return Ok(RankingResponse::nothing_to_rank(
            "no resumes uploaded",
            Vec::new(),
        ));
    }

    let computed = compute_ranking(&state.vocabulary, &state.extractors, &jd, &resumes)?;
    if computed.results.is_empty() {
        return Ok(RankingResponse::nothing_to_rank(
            "no resumes could be read",
            computed.skipped,
        ));
    }

    info!(
        resumes = computed.results.len(),
        skipped = computed.skipped.len(),
        "ranking computed"
    );

    let persist_failures = store::save_results(
        &state.db,
        &computed.jd_text,
        &computed.results,
        &computed.resume_texts,
    )
    .await;

    Ok(RankingResponse {
        results: computed.results,
        skipped: computed.skipped,
        persist_failures,
        note: None,
    })
}
