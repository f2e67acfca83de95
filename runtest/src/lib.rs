//! Compile one test source file and run it with a JUnit-style runner.
//!
//! - **[`core`]**: Pure logic (class name derivation). No I/O.
//! - **[`io`]**: Config loading and shell invocation, behind the
//!   [`io::process::Shell`] trait so tests can script it.
//!
//! [`invoke`] ties the two together: compile, derive the class name, run.

pub mod core;
pub mod exit_codes;
pub mod invoke;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
