//! Runtime configuration for vault-hooks.
//!
//! Configuration is read from the process environment once per invocation.
//! The lock timeout is deliberately absent: it is a fixed constant in
//! [`crate::locks::LOCK_TIMEOUT`].

mod model;


pub use model::{Config, VAULT_DIR_VAR};
