//! Jury authentication service

use sqlx::PgPool;

use crate::{
    db::repositories::JuryRepository,
    error::{AppError, AppResult},
    models::Jury,
    utils::password,
};

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Authenticate a jury by email and password
    ///
    /// A missing account and a wrong password are indistinguishable to the
    /// caller; both yield [`AppError::InvalidCredentials`].
    pub async fn login(pool: &PgPool, email: &str, password: &str) -> AppResult<Jury> {
        let jury = JuryRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !password::verify_password(password, &jury.password_hash) {
            return Err(AppError::InvalidCredentials);
        }

        Ok(jury)
    }
}
