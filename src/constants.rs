//! Application-wide constants

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 4000;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// SUBMISSIONS
// =============================================================================

/// Maximum number of submissions a single team may have
pub const MAX_SUBMISSIONS_PER_TEAM: i64 = 2;

/// Length of the fixed prefix on problem codes (the "SIH" in "SIH25010")
pub const PROBLEM_CODE_PREFIX_LEN: usize = 3;

/// Phone numbers are exactly 10 ASCII digits
pub const PHONE_PATTERN: &str = r"^[0-9]{10}$";

// =============================================================================
// EVALUATIONS
// =============================================================================

/// Minimum score a jury may award per criterion
pub const MIN_CRITERION_SCORE: i32 = 0;

/// Maximum score a jury may award per criterion
pub const MAX_CRITERION_SCORE: i32 = 10;
