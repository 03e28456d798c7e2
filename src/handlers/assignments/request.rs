//! Assignment request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create assignment request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssignmentRequest {
    #[validate(length(min = 1, message = "team_id must not be empty"))]
    pub team_id: String,

    #[validate(length(min = 1, message = "jury_id must not be empty"))]
    pub jury_id: String,
}

/// List assignments query parameters
#[derive(Debug, Deserialize)]
pub struct ListAssignmentsQuery {
    pub team_id: Option<String>,
    pub jury_id: Option<String>,
}
