//! Assignment service

use sqlx::PgPool;

use crate::{
    db::repositories::AssignmentRepository,
    error::AppResult,
    models::Assignment,
};

/// Assignment service for business logic
pub struct AssignmentService;

impl AssignmentService {
    /// Assign a jury to a team
    pub async fn create_assignment(
        pool: &PgPool,
        team_id: &str,
        jury_id: &str,
    ) -> AppResult<Assignment> {
        AssignmentRepository::create(pool, team_id, jury_id).await
    }

    /// List assignments
    pub async fn list_assignments(
        pool: &PgPool,
        team_id: Option<&str>,
        jury_id: Option<&str>,
    ) -> AppResult<Vec<Assignment>> {
        AssignmentRepository::list(pool, team_id, jury_id).await
    }
}
