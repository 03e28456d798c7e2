//! Evaluation model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Evaluation database model
///
/// One jury's scoring of one team. `total_score` is the server-computed sum
/// of the four criteria.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: Uuid,
    pub team_id: String,
    pub jury_id: String,
    pub ppt_design: i32,
    pub idea: i32,
    pub pitching: i32,
    pub project_impact: i32,
    pub remarks: Option<String>,
    pub total_score: i32,
    pub created_at: DateTime<Utc>,
}
