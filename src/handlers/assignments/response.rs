//! Assignment response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Assignment;

/// Assignment response
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub id: Uuid,
    pub team_id: String,
    pub jury_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Assignment> for AssignmentResponse {
    fn from(assignment: Assignment) -> Self {
        Self {
            id: assignment.id,
            team_id: assignment.team_id,
            jury_id: assignment.jury_id,
            created_at: assignment.created_at,
        }
    }
}
