//! Error types for vault-hooks.
//!
//! The sync workflow itself never surfaces these; they are used by the
//! session store, hook input decoding, and the lock maintenance commands.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for vault-hooks operations.
#[derive(Error, Debug)]
pub enum VaultError {
    /// Invalid arguments, malformed state files, or filesystem problems.
    #[error("{0}")]
    UserError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Lock could not be inspected or cleared.
    #[error("Lock operation failed: {0}")]
    LockError(String),

    /// Hook input on stdin could not be read or decoded.
    #[error("Invalid hook input: {0}")]
    HookInputError(String),
}

impl VaultError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            VaultError::UserError(_) => exit_codes::USER_ERROR,
            VaultError::HookInputError(_) => exit_codes::USER_ERROR,
            VaultError::GitError(_) => exit_codes::GIT_FAILURE,
            VaultError::LockError(_) => exit_codes::LOCK_FAILURE,
        }
    }
}

/// Result type alias for vault-hooks operations.
pub type Result<T> = std::result::Result<T, VaultError>;
