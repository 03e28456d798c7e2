//! Evaluation repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Evaluation};

/// Repository for evaluation database operations
pub struct EvaluationRepository;

impl EvaluationRepository {
    /// Create a new evaluation
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        team_id: &str,
        jury_id: &str,
        ppt_design: i32,
        idea: i32,
        pitching: i32,
        project_impact: i32,
        remarks: Option<&str>,
        total_score: i32,
    ) -> AppResult<Evaluation> {
        let evaluation = sqlx::query_as::<_, Evaluation>(
            r#"
            INSERT INTO evaluations (
                team_id, jury_id, ppt_design, idea, pitching,
                project_impact, remarks, total_score
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(team_id)
        .bind(jury_id)
        .bind(ppt_design)
        .bind(idea)
        .bind(pitching)
        .bind(project_impact)
        .bind(remarks)
        .bind(total_score)
        .fetch_one(pool)
        .await?;

        Ok(evaluation)
    }

    /// List evaluations with optional team and jury filters
    pub async fn list(
        pool: &PgPool,
        team_id: Option<&str>,
        jury_id: Option<&str>,
    ) -> AppResult<Vec<Evaluation>> {
        let evaluations = sqlx::query_as::<_, Evaluation>(
            r#"
            SELECT * FROM evaluations
            WHERE
                ($1::text IS NULL OR team_id = $1)
                AND ($2::text IS NULL OR jury_id = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(team_id)
        .bind(jury_id)
        .fetch_all(pool)
        .await?;

        Ok(evaluations)
    }
}
