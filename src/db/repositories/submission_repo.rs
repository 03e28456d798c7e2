//! Submission repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Submission};

/// Columns the submission list endpoint may sort by
///
/// Anything outside this set falls back to the creation column instead of
/// being interpolated into the query.
fn sort_column(requested: &str) -> Option<&'static str> {
    match requested {
        "team_id" => Some("team_id"),
        "problem_id" => Some("problem_id"),
        "problem_code" => Some("problem_code"),
        "created_at" => Some("created_at"),
        "presented" => Some("presented"),
        _ => None,
    }
}

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// List submissions with optional team search and sorting
    ///
    /// `search` is a case-insensitive substring match on the team identifier.
    /// Sorting applies only when both `sort` and `order` are present, matching
    /// the behavior of the admin dashboard this serves.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        sort: Option<&str>,
        order: Option<&str>,
    ) -> AppResult<Vec<Submission>> {
        let order_by = match (sort, order) {
            (Some(sort), Some(order)) => {
                let column = sort_column(sort).unwrap_or("created_at");
                let direction = if order == "asc" { "ASC" } else { "DESC" };
                format!("{column} {direction}")
            }
            _ => "created_at ASC".to_string(),
        };

        let query = format!(
            r#"
            SELECT * FROM submissions
            WHERE ($1::text IS NULL OR team_id ILIKE '%' || $1 || '%')
            ORDER BY {order_by}
            "#
        );

        let submissions = sqlx::query_as::<_, Submission>(&query)
            .bind(search)
            .fetch_all(pool)
            .await?;

        Ok(submissions)
    }

    /// Mark a submission as presented
    pub async fn mark_presented(pool: &PgPool, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"UPDATE submissions SET presented = TRUE WHERE id = $1 RETURNING *"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(submission)
    }

    /// Delete a submission; returns whether a row was removed
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM submissions WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_whitelist() {
        assert_eq!(sort_column("team_id"), Some("team_id"));
        assert_eq!(sort_column("created_at"), Some("created_at"));
        assert_eq!(sort_column("presented"), Some("presented"));
        // injection attempts and unknown columns are rejected
        assert_eq!(sort_column("team_id; DROP TABLE submissions"), None);
        assert_eq!(sort_column("slides_link"), None);
        assert_eq!(sort_column(""), None);
    }
}
