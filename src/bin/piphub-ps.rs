//! `piphub-ps`: launch the bundled PowerShell release-automation script.

use piphub::cli::{self, PowerShellCli};
use piphub::script::Script;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _args = PowerShellCli::parse_args();
    cli::run(Script::PowerShell)
}
