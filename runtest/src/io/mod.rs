//! I/O helpers for the invoker.

pub mod config;
pub mod process;
