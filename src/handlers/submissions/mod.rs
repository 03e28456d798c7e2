//! Submission handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

/// Submission routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/submit", post(handler::submit))
        .route("/submissions", get(handler::list_submissions))
        .route("/submissions/{id}/presented", patch(handler::mark_presented))
        .route("/submissions/{id}", delete(handler::delete_submission))
}
