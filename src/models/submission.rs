//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Submission database model
///
/// `problem_id` is the numeric portion of `problem_code` (0 when the code
/// does not parse). A team has at most two submissions.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub team_id: String,
    pub problem_id: i32,
    pub problem_code: String,
    pub slides_link: String,
    pub presented: bool,
    pub created_at: DateTime<Utc>,
}
