//! Jury model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Jury database model
///
/// Accounts are created out-of-band (see the `seed_jury` binary); the
/// endpoints only ever read them.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Jury {
    pub id: Uuid,
    pub jury_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    /// `"<saltHex>:<derivedHex>"`, produced by [`crate::utils::password`].
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
