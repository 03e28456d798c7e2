//! Submission handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    services::SubmissionService,
    state::AppState,
};

use super::{
    request::{ListSubmissionsQuery, SubmitRequest},
    response::{DeleteSubmissionResponse, SubmissionResponse},
};

/// Admit a team's submission
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> AppResult<Json<SubmissionResponse>> {
    payload.validate()?;

    let submission = SubmissionService::submit(state.db(), payload).await?;

    Ok(Json(submission.into()))
}

/// List submissions
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(query): Query<ListSubmissionsQuery>,
) -> AppResult<Json<Vec<SubmissionResponse>>> {
    let submissions = SubmissionService::list_submissions(
        state.db(),
        query.search.as_deref(),
        query.sort.as_deref(),
        query.order.as_deref(),
    )
    .await?;

    Ok(Json(submissions.into_iter().map(Into::into).collect()))
}

/// Mark a submission as presented
pub async fn mark_presented(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = SubmissionService::mark_presented(state.db(), &id).await?;

    Ok(Json(submission.into()))
}

/// Delete a submission
pub async fn delete_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeleteSubmissionResponse>> {
    SubmissionService::delete_submission(state.db(), &id).await?;

    Ok(Json(DeleteSubmissionResponse { success: true }))
}
