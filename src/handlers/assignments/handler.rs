//! Assignment handler implementations

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{error::AppResult, services::AssignmentService, state::AppState};

use super::{
    request::{CreateAssignmentRequest, ListAssignmentsQuery},
    response::AssignmentResponse,
};

/// Assign a jury to a team
pub async fn create_assignment(
    State(state): State<AppState>,
    Json(payload): Json<CreateAssignmentRequest>,
) -> AppResult<(StatusCode, Json<AssignmentResponse>)> {
    payload.validate()?;

    let assignment =
        AssignmentService::create_assignment(state.db(), &payload.team_id, &payload.jury_id)
            .await?;

    Ok((StatusCode::CREATED, Json(assignment.into())))
}

/// List assignments
pub async fn list_assignments(
    State(state): State<AppState>,
    Query(query): Query<ListAssignmentsQuery>,
) -> AppResult<Json<Vec<AssignmentResponse>>> {
    let assignments = AssignmentService::list_assignments(
        state.db(),
        query.team_id.as_deref(),
        query.jury_id.as_deref(),
    )
    .await?;

    Ok(Json(assignments.into_iter().map(Into::into).collect()))
}
