//! Assignment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Assignment database model
///
/// Links a jury to a team it evaluates; unique per (team, jury) pair.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Assignment {
    pub id: Uuid,
    pub team_id: String,
    pub jury_id: String,
    pub created_at: DateTime<Utc>,
}
