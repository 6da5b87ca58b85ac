//! CLI argument surfaces for the launcher binaries.
//!
//! Uses clap derive macros. The launchers take no arguments of their own;
//! the parsers exist to reject stray arguments and provide the standard
//! `--help` / `--version` flags. The shared `run` body maps launch results
//! to process exit codes.

use crate::error::LaunchError;
use crate::exit_codes;
use crate::launcher;
use crate::script::Script;
use clap::Parser;
use std::process::ExitCode;

/// Run the bundled bash release-automation script.
///
/// On Windows the script runs through WSL; elsewhere it runs with bash
/// directly. The exit code mirrors the script's own.
#[derive(Parser, Debug)]
#[command(name = "piphub-bash")]
#[command(author, version, about, long_about = None)]
pub struct BashCli {}

/// Run the bundled PowerShell release-automation script.
///
/// On Windows the script runs with native powershell (execution policy
/// bypassed); elsewhere it runs with PowerShell Core (pwsh). The exit code
/// mirrors the script's own.
#[derive(Parser, Debug)]
#[command(name = "piphub-ps")]
#[command(author, version, about, long_about = None)]
pub struct PowerShellCli {}

/// Run whichever bundled release-automation script matches this platform.
///
/// Picks the PowerShell script on Windows and the bash script everywhere
/// else. The exit code mirrors the script's own.
#[derive(Parser, Debug)]
#[command(name = "piphub")]
#[command(author, version, about, long_about = None)]
pub struct AutoCli {}

impl BashCli {
    pub fn parse_args() -> Self {
        BashCli::parse()
    }
}

impl PowerShellCli {
    pub fn parse_args() -> Self {
        PowerShellCli::parse()
    }
}

impl AutoCli {
    pub fn parse_args() -> Self {
        AutoCli::parse()
    }
}

/// Shared binary body: launch the script and map the outcome to this
/// process's exit code.
///
/// Launcher-side failures get a one-line diagnostic on stderr; a script
/// that ran and failed already said what it had to say, so only its exit
/// code is mirrored.
pub fn run(script: Script) -> ExitCode {
    match launcher::launch(script) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => exit_with(err),
    }
}

fn exit_with(err: LaunchError) -> ExitCode {
    if err.prints_diagnostic() {
        eprintln!("Error: {}", err);
    }
    ExitCode::from(err.exit_code() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies each binary's argument configuration is valid.
        BashCli::command().debug_assert();
        PowerShellCli::command().debug_assert();
        AutoCli::command().debug_assert();
    }

    #[test]
    fn parse_bare_invocations() {
        BashCli::try_parse_from(["piphub-bash"]).unwrap();
        PowerShellCli::try_parse_from(["piphub-ps"]).unwrap();
        AutoCli::try_parse_from(["piphub"]).unwrap();
    }

    #[test]
    fn stray_arguments_are_rejected() {
        assert!(BashCli::try_parse_from(["piphub-bash", "extra"]).is_err());
        assert!(PowerShellCli::try_parse_from(["piphub-ps", "--unknown"]).is_err());
        assert!(AutoCli::try_parse_from(["piphub", "now"]).is_err());
    }
}
