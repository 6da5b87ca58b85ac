//! Host platform identity.
//!
//! Interpreter selection only needs to know "Windows or not". The trait
//! exists so the selection table can be exercised for both answers on any
//! build host without touching real processes.

/// Operating-system family, as far as interpreter selection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    /// Native Windows; bash work is bridged through WSL.
    Windows,
    /// Linux, macOS, BSDs: `bash` and `pwsh` are invoked directly.
    Posix,
}

/// Source of the host OS identity.
pub trait Platform {
    fn current_os(&self) -> HostOs;
}

/// The real host this process runs on.
pub struct HostPlatform;

impl Platform for HostPlatform {
    fn current_os(&self) -> HostOs {
        if cfg!(windows) {
            HostOs::Windows
        } else {
            HostOs::Posix
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_platform_matches_build_target() {
        let os = HostPlatform.current_os();
        if cfg!(windows) {
            assert_eq!(os, HostOs::Windows);
        } else {
            assert_eq!(os, HostOs::Posix);
        }
    }
}
