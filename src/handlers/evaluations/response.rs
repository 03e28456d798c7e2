//! Evaluation response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Evaluation;

/// Evaluation response
#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
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

impl From<Evaluation> for EvaluationResponse {
    fn from(evaluation: Evaluation) -> Self {
        Self {
            id: evaluation.id,
            team_id: evaluation.team_id,
            jury_id: evaluation.jury_id,
            ppt_design: evaluation.ppt_design,
            idea: evaluation.idea,
            pitching: evaluation.pitching,
            project_impact: evaluation.project_impact,
            remarks: evaluation.remarks,
            total_score: evaluation.total_score,
            created_at: evaluation.created_at,
        }
    }
}
