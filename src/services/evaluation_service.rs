//! Evaluation service

use sqlx::PgPool;

use crate::{
    db::repositories::{AssignmentRepository, EvaluationRepository},
    error::{AppError, AppResult},
    handlers::evaluations::request::CreateEvaluationRequest,
    models::Evaluation,
};

/// Evaluation service for business logic
pub struct EvaluationService;

impl EvaluationService {
    /// Record a jury's evaluation of a team
    ///
    /// The jury must be assigned to the team. The total is computed here, not
    /// accepted from the client.
    pub async fn create_evaluation(
        pool: &PgPool,
        payload: CreateEvaluationRequest,
    ) -> AppResult<Evaluation> {
        let assigned = AssignmentRepository::exists(pool, &payload.team_id, &payload.jury_id).await?;
        if !assigned {
            return Err(AppError::Validation(
                "Jury is not assigned to this team".to_string(),
            ));
        }

        EvaluationRepository::create(
            pool,
            &payload.team_id,
            &payload.jury_id,
            payload.ppt_design,
            payload.idea,
            payload.pitching,
            payload.project_impact,
            payload.remarks.as_deref(),
            total_score(&payload),
        )
        .await
    }

    /// List evaluations
    pub async fn list_evaluations(
        pool: &PgPool,
        team_id: Option<&str>,
        jury_id: Option<&str>,
    ) -> AppResult<Vec<Evaluation>> {
        EvaluationRepository::list(pool, team_id, jury_id).await
    }
}

/// Sum of the four scoring criteria
fn total_score(payload: &CreateEvaluationRequest) -> i32 {
    payload.ppt_design + payload.idea + payload.pitching + payload.project_impact
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_score() {
        let payload = CreateEvaluationRequest {
            team_id: "T001".to_string(),
            jury_id: "J001".to_string(),
            ppt_design: 7,
            idea: 9,
            pitching: 6,
            project_impact: 8,
            remarks: None,
        };
        assert_eq!(total_score(&payload), 30);
    }
}
