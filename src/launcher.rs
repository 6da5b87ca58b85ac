//! Entry-point orchestration.
//!
//! One control flow shared by every entry point: locate the bundled
//! script, materialize it, pick the interpreter for the host, run it, and
//! clean up. Cleanup is guaranteed by the temp-path guard: once the file
//! exists, it is deleted on every exit path, error or not.

use crate::error::Result;
use crate::interpreter::{self, Selection};
use crate::materialize::materialize;
use crate::platform::{HostPlatform, Platform};
use crate::runner::run_script;
use crate::script::Script;

/// Launch `script` on the real host platform.
pub fn launch(script: Script) -> Result<()> {
    launch_on(&HostPlatform, script)
}

/// Launch `script`, resolving the interpreter against `platform`.
pub fn launch_on(platform: &dyn Platform, script: Script) -> Result<()> {
    let content = script.content()?;
    let selection = interpreter::select(script, platform.current_os());
    run_materialized(content, script, &selection)
}

/// Materialize `content` and hand it to the selected interpreter. The temp
/// file lives exactly as long as this call.
fn run_materialized(content: &str, script: Script, selection: &Selection) -> Result<()> {
    let temp = materialize(script, content)?;
    run_script(selection, &temp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LaunchError;
    use crate::interpreter::Invocation;
    use crate::platform::HostOs;
    use std::path::PathBuf;

    struct FakePlatform(HostOs);

    impl Platform for FakePlatform {
        fn current_os(&self) -> HostOs {
            self.0
        }
    }

    const BASH: Selection = Selection {
        candidates: &[Invocation {
            program: "bash",
            args: &[],
        }],
        missing_help: None,
    };

    const ABSENT: Selection = Selection {
        candidates: &[Invocation {
            program: "piphub-test-no-such-interpreter",
            args: &[],
        }],
        missing_help: None,
    };

    // The cleanup invariant: whatever the runner outcome, the materialized
    // file must be gone once the invocation is over.

    #[cfg(unix)]
    #[test]
    fn temp_file_is_removed_after_success() {
        let path: PathBuf;
        {
            let temp = materialize(Script::Bash, "#!/usr/bin/env bash\nexit 0\n").unwrap();
            path = temp.to_path_buf();
            run_script(&BASH, &temp).unwrap();
        }
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn temp_file_is_removed_after_script_failure() {
        let path: PathBuf;
        {
            let temp = materialize(Script::Bash, "#!/usr/bin/env bash\nexit 5\n").unwrap();
            path = temp.to_path_buf();
            let err = run_script(&BASH, &temp).unwrap_err();
            assert_eq!(err.exit_code(), 5);
        }
        assert!(!path.exists());
    }

    #[test]
    fn temp_file_is_removed_after_missing_interpreter() {
        let path: PathBuf;
        {
            let temp = materialize(Script::Bash, "echo hi\n").unwrap();
            path = temp.to_path_buf();
            let err = run_script(&ABSENT, &temp).unwrap_err();
            assert!(matches!(err, LaunchError::InterpreterNotFound(_)));
        }
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn bash_entry_on_windows_without_wsl_points_at_the_powershell_entry() {
        // A Unix test host has no `wsl`, which is exactly the
        // missing-bridge case the Windows table row guards against.
        let err = launch_on(&FakePlatform(HostOs::Windows), Script::Bash).unwrap_err();
        match err {
            LaunchError::InterpreterNotFound(msg) => {
                assert!(msg.contains("WSL"));
                assert!(msg.contains("piphub-ps"));
            }
            other => panic!("expected InterpreterNotFound, got {other:?}"),
        }
    }
}
