//! Feature gate for the sync workflow.

/// Environment variable that switches vault syncing on.
pub const GIT_PUSH_VAR: &str = "CLAUDE_VAULT_GIT_PUSH";

/// Interpret a boolean-like configuration value.
///
/// Only `1` and `true` (case-insensitive, surrounding whitespace ignored)
/// open the gate. Everything else, including the empty string, keeps it closed.
pub fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}
