//! Library surface of the intake CLI.
//!
//! Only the logging setup lives here so binaries and tests can share it.

pub mod logging;
