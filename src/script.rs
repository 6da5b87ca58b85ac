//! Bundled script resources.
//!
//! The two automation scripts ship inside the binary via `include_str!`.
//! This module is the lookup layer between a logical script identity and
//! its packaged content; nothing here inspects what the scripts do.

use crate::error::{LaunchError, Result};

/// The set of scripts bundled with this package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// POSIX-shell release automation (`scripts/piphub.bash`).
    Bash,
    /// PowerShell release automation (`scripts/piphub.ps1`).
    PowerShell,
}

impl Script {
    /// Canonical file name of the packaged script.
    pub fn file_name(&self) -> &'static str {
        match self {
            Script::Bash => "piphub.bash",
            Script::PowerShell => "piphub.ps1",
        }
    }

    /// Suffix for the materialized temp file. Interpreter affinity only;
    /// nothing parses the name.
    pub fn suffix(&self) -> &'static str {
        match self {
            Script::Bash => ".bash",
            Script::PowerShell => ".ps1",
        }
    }

    fn embedded(&self) -> &'static str {
        match self {
            Script::Bash => include_str!("../scripts/piphub.bash"),
            Script::PowerShell => include_str!("../scripts/piphub.ps1"),
        }
    }

    /// Full text of the bundled script, UTF-8.
    ///
    /// Blank content means the packaging step that embeds the scripts was
    /// broken; that is fatal for the invocation, no retry.
    pub fn content(&self) -> Result<&'static str> {
        let text = self.embedded();
        if text.trim().is_empty() {
            return Err(LaunchError::MissingScript(self.file_name().to_string()));
        }
        Ok(text)
    }
}
