//! Assignment repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Assignment};

/// Repository for jury-to-team assignment operations
pub struct AssignmentRepository;

impl AssignmentRepository {
    /// Create a new assignment
    ///
    /// The (team, jury) pair is unique; a duplicate surfaces as a conflict.
    pub async fn create(pool: &PgPool, team_id: &str, jury_id: &str) -> AppResult<Assignment> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO assignments (team_id, jury_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(team_id)
        .bind(jury_id)
        .fetch_one(pool)
        .await?;

        Ok(assignment)
    }

    /// List assignments with optional team and jury filters
    pub async fn list(
        pool: &PgPool,
        team_id: Option<&str>,
        jury_id: Option<&str>,
    ) -> AppResult<Vec<Assignment>> {
        let assignments = sqlx::query_as::<_, Assignment>(
            r#"
            SELECT * FROM assignments
            WHERE
                ($1::text IS NULL OR team_id = $1)
                AND ($2::text IS NULL OR jury_id = $2)
            ORDER BY created_at
            "#,
        )
        .bind(team_id)
        .bind(jury_id)
        .fetch_all(pool)
        .await?;

        Ok(assignments)
    }

    /// Check whether a jury is assigned to a team
    pub async fn exists(pool: &PgPool, team_id: &str, jury_id: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM assignments
                WHERE team_id = $1 AND jury_id = $2
            )
            "#,
        )
        .bind(team_id)
        .bind(jury_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}
