//! Stable exit codes for the `runtest` CLI.

/// Test compiled and the runner was started (its own result is not reflected here).
pub const OK: i32 = 0;
/// Compile failed, config was invalid, or the shell could not be spawned.
pub const FAILED: i32 = 1;
