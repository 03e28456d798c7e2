//! Team repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Team};

/// Repository for team database operations
///
/// Team writes happen inside the submission admission transaction
/// (see [`crate::services::SubmissionService`]); this repository covers reads.
pub struct TeamRepository;

impl TeamRepository {
    /// List all teams
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(r#"SELECT * FROM teams ORDER BY team_id"#)
            .fetch_all(pool)
            .await?;

        Ok(teams)
    }
}
