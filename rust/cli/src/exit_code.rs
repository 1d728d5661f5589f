//! Exit codes returned by [`crate::run`].

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;

/// Input stream interrupted (Ctrl+C).
pub const INTERRUPTED: i32 = 130;
