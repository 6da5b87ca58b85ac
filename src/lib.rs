//! Piphub: launcher for the bundled PipHub release-automation scripts.
//!
//! The crate ships two automation scripts (one bash, one PowerShell)
//! inside the binary and exposes three entry points that materialize one
//! of them to a temporary file, hand it to the right interpreter for the
//! host, mirror the script's exit code, and remove the file again. The
//! scripts themselves are opaque payloads; all of the launcher's logic is
//! picking the interpreter and managing the temp file's lifetime.

pub mod cli;
pub mod error;
pub mod exit_codes;
pub mod interpreter;
pub mod launcher;
pub mod materialize;
pub mod platform;
pub mod runner;
pub mod script;

#[cfg(test)]
pub(crate) mod test_support;
