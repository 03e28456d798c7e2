//! Team model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Team database model
///
/// Keyed by the business identifier `team_id`; one record per team,
/// overwritten on re-submission.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub team_id: String,
    pub team_name: String,
    pub leader_name: String,
    pub leader_id: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
