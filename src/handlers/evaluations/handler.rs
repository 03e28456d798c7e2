//! Evaluation handler implementations

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{error::AppResult, services::EvaluationService, state::AppState};

use super::{
    request::{CreateEvaluationRequest, ListEvaluationsQuery},
    response::EvaluationResponse,
};

/// Record a jury's evaluation of a team
pub async fn create_evaluation(
    State(state): State<AppState>,
    Json(payload): Json<CreateEvaluationRequest>,
) -> AppResult<(StatusCode, Json<EvaluationResponse>)> {
    payload.validate()?;

    let evaluation = EvaluationService::create_evaluation(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(evaluation.into())))
}

/// List evaluations
pub async fn list_evaluations(
    State(state): State<AppState>,
    Query(query): Query<ListEvaluationsQuery>,
) -> AppResult<Json<Vec<EvaluationResponse>>> {
    let evaluations = EvaluationService::list_evaluations(
        state.db(),
        query.team_id.as_deref(),
        query.jury_id.as_deref(),
    )
    .await?;

    Ok(Json(evaluations.into_iter().map(Into::into).collect()))
}
