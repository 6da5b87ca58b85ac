//! Interpreter selection.
//!
//! A data-driven table: each (script, host OS) pair maps to an ordered list
//! of candidate interpreter invocations plus the guidance shown when every
//! candidate is absent. Kept as data rather than nested conditionals so a
//! new interpreter is a table edit, not a new branch.

use crate::platform::HostOs;
use crate::script::Script;

/// One way of invoking an interpreter: the program plus the arguments that
/// precede the script path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

/// The interpreter plan for one entry point on one host OS.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    /// Candidates, tried in order. A candidate whose binary is absent falls
    /// through to the next one; a candidate that actually ran settles the
    /// outcome.
    pub candidates: &'static [Invocation],
    /// Guidance printed when no candidate binary exists, naming the
    /// alternative entry point. `None` falls back to the generic
    /// launch-failure diagnostic.
    pub missing_help: Option<&'static str>,
}

const WSL_HELP: &str = "WSL not found. Please install WSL or use piphub-ps instead.";
const PWSH_HELP: &str =
    "PowerShell Core (pwsh) not found. Please install PowerShell Core or use piphub-bash instead.";

/// Resolve the interpreter plan for `script` on `os`.
pub fn select(script: Script, os: HostOs) -> Selection {
    match (script, os) {
        // Native Windows has no bash; bridge through WSL.
        (Script::Bash, HostOs::Windows) => Selection {
            candidates: &[Invocation {
                program: "wsl",
                args: &["bash"],
            }],
            missing_help: Some(WSL_HELP),
        },
        (Script::Bash, HostOs::Posix) => Selection {
            candidates: &[Invocation {
                program: "bash",
                args: &[],
            }],
            missing_help: None,
        },
        (Script::PowerShell, HostOs::Windows) => Selection {
            candidates: &[Invocation {
                program: "powershell",
                args: &["-ExecutionPolicy", "Bypass", "-File"],
            }],
            missing_help: None,
        },
        (Script::PowerShell, HostOs::Posix) => Selection {
            candidates: &[Invocation {
                program: "pwsh",
                args: &["-File"],
            }],
            missing_help: Some(PWSH_HELP),
        },
    }
}
