//! Jury repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Jury};

/// Repository for jury database operations
pub struct JuryRepository;

impl JuryRepository {
    /// Create a new jury account
    ///
    /// `password_hash` must already be in storage form
    /// (see [`crate::utils::password::hash_password`]).
    pub async fn create(
        pool: &PgPool,
        jury_id: &str,
        name: &str,
        email: &str,
        department: &str,
        password_hash: &str,
    ) -> AppResult<Jury> {
        let jury = sqlx::query_as::<_, Jury>(
            r#"
            INSERT INTO juries (jury_id, name, email, department, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(jury_id)
        .bind(name)
        .bind(email)
        .bind(department)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

        Ok(jury)
    }

    /// Find jury by email (for login)
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<Jury>> {
        let jury = sqlx::query_as::<_, Jury>(r#"SELECT * FROM juries WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(jury)
    }
}
