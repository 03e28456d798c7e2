//! HackTrack - Hackathon Submission Tracking
//!
//! This library provides the core functionality for the HackTrack service,
//! a hackathon portal where teams submit presentation links against problem
//! statements and juries log in to score them.
//!
//! # Features
//!
//! - Team submissions with a hard per-team quota and team metadata upsert
//! - Jury authentication with salted scrypt credentials
//! - Jury-to-team assignments and score evaluations
//! - Submission administration (listing, presented flag, deletion)
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
