//! Exit code constants for the piphub launcher.
//!
//! - 0: Success
//! - 1: Launcher failure (missing interpreter, corrupt package, internal error)
//! - anything else: the bundled script's own exit code, mirrored unchanged

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Launcher failure: interpreter or bundled script missing, or an
/// unexpected internal error. Script exit codes are mirrored as-is and do
/// not use this constant.
pub const FAILURE: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(SUCCESS, FAILURE);
    }

    #[test]
    fn exit_codes_match_contract() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(FAILURE, 1);
    }
}
