//! Jury handler implementations

use axum::{Json, extract::State};

use crate::{error::AppResult, services::AuthService, state::AppState};

use super::{request::LoginRequest, response::LoginResponse};

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let jury = AuthService::login(state.db(), &payload.email, &payload.password).await?;

    Ok(Json(LoginResponse {
        jury_id: jury.jury_id,
        name: jury.name,
        department: jury.department,
    }))
}
