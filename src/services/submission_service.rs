//! Submission service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::MAX_SUBMISSIONS_PER_TEAM,
    db::repositories::SubmissionRepository,
    error::{AppError, AppResult},
    handlers::submissions::request::SubmitRequest,
    models::Submission,
    utils::validation::problem_numeric_id,
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Admit a team's submission
    ///
    /// Team metadata is upserted unconditionally, even when the submission
    /// itself is rejected for being over quota. Running the whole sequence in
    /// one transaction makes the upsert's row lock serialize concurrent
    /// admissions for the same team, so the quota check and the insert cannot
    /// interleave between two requests.
    pub async fn submit(pool: &PgPool, payload: SubmitRequest) -> AppResult<Submission> {
        let problem_id = problem_numeric_id(&payload.problem_code);

        let mut tx = pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO teams (team_id, team_name, leader_name, leader_id, phone)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (team_id) DO UPDATE SET
                team_name = EXCLUDED.team_name,
                leader_name = EXCLUDED.leader_name,
                leader_id = EXCLUDED.leader_id,
                phone = EXCLUDED.phone,
                updated_at = NOW()
            "#,
        )
        .bind(&payload.team_id)
        .bind(&payload.team_name)
        .bind(&payload.leader_name)
        .bind(&payload.leader_id)
        .bind(&payload.phone)
        .execute(&mut *tx)
        .await?;

        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM submissions WHERE team_id = $1"#)
                .bind(&payload.team_id)
                .fetch_one(&mut *tx)
                .await?;

        if count >= MAX_SUBMISSIONS_PER_TEAM {
            // The team refresh stands even when the submission is rejected.
            tx.commit().await?;
            return Err(AppError::QuotaExceeded);
        }

        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (team_id, problem_id, problem_code, slides_link)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&payload.team_id)
        .bind(problem_id)
        .bind(&payload.problem_code)
        .bind(&payload.slides_link)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            team_id = %submission.team_id,
            problem_code = %submission.problem_code,
            "Submission recorded"
        );

        Ok(submission)
    }

    /// List submissions
    pub async fn list_submissions(
        pool: &PgPool,
        search: Option<&str>,
        sort: Option<&str>,
        order: Option<&str>,
    ) -> AppResult<Vec<Submission>> {
        SubmissionRepository::list(pool, search, sort, order).await
    }

    /// Mark a submission as presented
    pub async fn mark_presented(pool: &PgPool, id: &Uuid) -> AppResult<Submission> {
        SubmissionRepository::mark_presented(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))
    }

    /// Delete a submission
    pub async fn delete_submission(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        let deleted = SubmissionRepository::delete(pool, id).await?;
        if !deleted {
            return Err(AppError::NotFound("Submission not found".to_string()));
        }

        Ok(())
    }
}
