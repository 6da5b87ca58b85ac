//! `piphub-bash`: launch the bundled bash release-automation script.

use piphub::cli::{self, BashCli};
use piphub::script::Script;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _args = BashCli::parse_args();
    cli::run(Script::Bash)
}
