//! Evaluation handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Evaluation routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_evaluation))
        .route("/", get(handler::list_evaluations))
}
