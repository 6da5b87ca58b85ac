//! `piphub`: launch whichever bundled script matches the host platform.
//!
//! PowerShell on Windows, bash everywhere else.

use piphub::cli::{self, AutoCli};
use piphub::platform::{HostOs, HostPlatform, Platform};
use piphub::script::Script;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _args = AutoCli::parse_args();
    let script = match HostPlatform.current_os() {
        HostOs::Windows => Script::PowerShell,
        HostOs::Posix => Script::Bash,
    };
    cli::run(script)
}
