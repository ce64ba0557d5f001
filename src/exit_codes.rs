//! Exit code constants for the vault-hooks CLI.
//!
//! - 0: Success (including every skipped or no-op sync)
//! - 1: User error (bad args, malformed session map, invalid state)
//! - 2: Git operation failure
//! - 3: Lock operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable hook input, or invalid state.
pub const USER_ERROR: i32 = 1;

/// Git operation failure outside the best-effort sync path.
pub const GIT_FAILURE: i32 = 2;

/// Lock operation failure: a lock could not be inspected or cleared.
pub const LOCK_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, GIT_FAILURE, LOCK_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
