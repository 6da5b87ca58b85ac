//! Ephemeral script materialization.
//!
//! Scripts ship inside the binary; interpreters want a real file. This
//! module writes the content to a uniquely named temp file and hands back
//! an owning guard whose drop removes the file on every exit path.
//! Deletion is best-effort: a file that is already gone never turns into a
//! failure.

use crate::error::{LaunchError, Result};
use crate::script::Script;
use std::io::Write;
use tempfile::{Builder, NamedTempFile, TempPath};

/// Write `content` to a fresh temp file named for `script` and return the
/// owning path guard.
///
/// The handle is closed before returning so the interpreter can open the
/// path on every platform. On Unix the file is marked owner-executable.
/// Path uniqueness across concurrent invocations is delegated to
/// `tempfile`'s randomized naming.
pub fn materialize(script: Script, content: &str) -> Result<TempPath> {
    let mut file = Builder::new()
        .prefix("piphub-")
        .suffix(script.suffix())
        .tempfile()
        .map_err(|e| {
            LaunchError::Internal(format!("failed to create temporary script file: {e}"))
        })?;

    file.write_all(content.as_bytes()).map_err(|e| {
        LaunchError::Internal(format!(
            "failed to write temporary script file '{}': {e}",
            file.path().display()
        ))
    })?;

    // Sync so the interpreter never sees a partially written script.
    file.as_file().sync_all().map_err(|e| {
        LaunchError::Internal(format!("failed to sync temporary script file: {e}"))
    })?;

    set_executable(&file)?;

    Ok(file.into_temp_path())
}

#[cfg(unix)]
fn set_executable(file: &NamedTempFile) -> Result<()> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    file.as_file()
        .set_permissions(Permissions::from_mode(0o755))
        .map_err(|e| {
            LaunchError::Internal(format!(
                "failed to set permissions on '{}': {e}",
                file.path().display()
            ))
        })
}

#[cfg(not(unix))]
fn set_executable(_file: &NamedTempFile) -> Result<()> {
    // No execute bit on Windows; invoking the interpreter with the file
    // path is sufficient.
    Ok(())
}
