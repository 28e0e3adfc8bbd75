use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::export;
use crate::ranking::models::{RankingResponse, UploadedDocument};
use crate::ranking::pipeline::run_ranking;
use crate::state::AppState;
use crate::store::{self, ResumeRecordRow};

/// Multipart field name carrying the job description file.
const JD_FIELD: &str = "job_description";
/// Multipart field name carrying resume files (repeatable).
const RESUMES_FIELD: &str = "resumes";

/// POST /api/v1/rankings
pub async fn handle_create_ranking(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<RankingResponse>, AppError> {
    let (jd, resumes) = read_documents(multipart).await?;
    let response = run_ranking(&state, jd, resumes).await?;
    Ok(Json(response))
}

/// POST /api/v1/rankings/csv
///
/// Same intake as the JSON endpoint; responds with the CSV export of the
/// ranked results.
pub async fn handle_create_ranking_csv(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (jd, resumes) = read_documents(multipart).await?;
    let response = run_ranking(&state, jd, resumes).await?;
    let csv = export::to_csv(&response.results)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"ranked_resumes.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

/// GET /api/v1/rankings
pub async fn handle_list_saved(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeRecordRow>>, AppError> {
    let saved = store::fetch_saved(&state.db).await?;
    Ok(Json(saved))
}

/// Drains the multipart form into the job description (at most one) and the
/// resume batch.
async fn read_documents(
    mut multipart: Multipart,
) -> Result<(Option<UploadedDocument>, Vec<UploadedDocument>), AppError> {
    let mut jd = None;
    let mut resumes = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart request: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or("document").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read '{file_name}': {e}")))?;

        let document = UploadedDocument {
            name: file_name,
            content_type,
            bytes,
        };
        match field_name.as_str() {
            JD_FIELD => jd = Some(document),
            RESUMES_FIELD => resumes.push(document),
            other => {
                tracing::debug!(field = other, "ignoring unknown multipart field");
            }
        }
    }

    Ok((jd, resumes))
}
