//! Child-process execution for the selected interpreter.
//!
//! Candidates run in order; a missing binary falls through to the next one,
//! a binary that actually ran settles the outcome. The child inherits
//! stdin/stdout/stderr and the caller's working directory, so the script
//! sees the user's context. No timeout is applied: a hung script hangs the
//! launcher.

use crate::error::{LaunchError, Result};
use crate::interpreter::Selection;
use std::io;
use std::path::Path;
use std::process::Command;

/// Run the script at `script_path` with the first available candidate and
/// block until it terminates.
pub fn run_script(selection: &Selection, script_path: &Path) -> Result<()> {
    for candidate in selection.candidates {
        let status = Command::new(candidate.program)
            .args(candidate.args)
            .arg(script_path)
            .status();

        match status {
            // Binary not on the host; try the next candidate.
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(LaunchError::Internal(format!(
                    "failed to launch {}: {e}",
                    candidate.program
                )));
            }
            Ok(status) if status.success() => return Ok(()),
            Ok(status) => {
                return Err(match status.code() {
                    Some(code) => LaunchError::ScriptFailure { code },
                    // Killed by a signal; there is no code to mirror.
                    None => LaunchError::Internal(format!(
                        "{} terminated without an exit code",
                        candidate.program
                    )),
                });
            }
        }
    }

    Err(interpreter_not_found(selection))
}

fn interpreter_not_found(selection: &Selection) -> LaunchError {
    match selection.missing_help {
        Some(help) => LaunchError::InterpreterNotFound(help.to_string()),
        None => {
            let names: Vec<&str> = selection.candidates.iter().map(|c| c.program).collect();
            LaunchError::InterpreterNotFound(format!(
                "interpreter not found: {}. Ensure it is installed and in PATH.",
                names.join(", ")
            ))
        }
    }
}
