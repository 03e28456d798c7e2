//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod assignments;
pub mod evaluations;
pub mod health;
pub mod juries;
pub mod submissions;
pub mod teams;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(submissions::routes())
        .merge(teams::routes())
        .nest("/jury", juries::routes())
        .nest("/evaluations", evaluations::routes())
        .nest("/assignments", assignments::routes())
}
