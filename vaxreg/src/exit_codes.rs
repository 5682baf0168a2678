//! Stable exit codes for the registry binary.

/// Session ended on `q` or end of input. Rejected commands do not change this.
pub const OK: i32 = 0;
/// Startup failed (unreadable or invalid config, unreadable input).
pub const INVALID: i32 = 1;
/// Record storage could not grow.
pub const NO_MEMORY: i32 = -1;
