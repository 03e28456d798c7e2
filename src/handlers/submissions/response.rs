//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Submission;

/// Submission response
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub team_id: String,
    pub problem_id: i32,
    pub problem_code: String,
    pub slides_link: String,
    pub presented: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id,
            team_id: submission.team_id,
            problem_id: submission.problem_id,
            problem_code: submission.problem_code,
            slides_link: submission.slides_link,
            presented: submission.presented,
            created_at: submission.created_at,
        }
    }
}

/// Deletion acknowledgement
#[derive(Debug, Serialize)]
pub struct DeleteSubmissionResponse {
    pub success: bool,
}
