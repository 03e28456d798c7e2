//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod assignment_repo;
pub mod evaluation_repo;
pub mod jury_repo;
pub mod submission_repo;
pub mod team_repo;

pub use assignment_repo::AssignmentRepository;
pub use evaluation_repo::EvaluationRepository;
pub use jury_repo::JuryRepository;
pub use submission_repo::SubmissionRepository;
pub use team_repo::TeamRepository;
