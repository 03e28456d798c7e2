//! Jury response DTOs

use serde::Serialize;

/// Jury login response
///
/// Only the public profile; the password hash never leaves the service.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub jury_id: String,
    pub name: String,
    pub department: String,
}
