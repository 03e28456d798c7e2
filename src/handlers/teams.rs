//! Team handlers

use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    db::repositories::TeamRepository,
    error::AppResult,
    models::Team,
    state::AppState,
};

/// Team response
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub team_id: String,
    pub team_name: String,
    pub leader_name: String,
    pub leader_id: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            team_id: team.team_id,
            team_name: team.team_name,
            leader_name: team.leader_name,
            leader_id: team.leader_id,
            phone: team.phone,
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }
}

/// List all registered teams
async fn list_teams(State(state): State<AppState>) -> AppResult<Json<Vec<TeamResponse>>> {
    let teams = TeamRepository::list(state.db()).await?;

    Ok(Json(teams.into_iter().map(Into::into).collect()))
}

/// Team routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/teams", get(list_teams))
}
