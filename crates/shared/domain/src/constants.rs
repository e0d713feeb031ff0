//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Programs
// =============================================================================

/// Largest accepted program AST, measured as encoded JSON text
pub const MAX_AST_BYTES: usize = 1024 * 1024;

// =============================================================================
// Users
// =============================================================================

/// Minimum username length requirement
pub const MIN_USERNAME_LENGTH: usize = 1;

/// Maximum username length requirement
pub const MAX_USERNAME_LENGTH: usize = 64;
