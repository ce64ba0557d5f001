//! Hook input decoding.
//!
//! The session tool invokes each hook with a JSON object on stdin. Unknown
//! fields are ignored so newer tool versions keep working.

use crate::error::{Result, VaultError};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::io::Read;

/// Input sent to the prompt-submit hook.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PromptInput {
    pub session_id: String,
    #[serde(default)]
    pub cwd: String,
    #[serde(default)]
    pub prompt: String,
}

/// Input sent to the stop hook.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StopInput {
    pub session_id: String,
    #[serde(default)]
    pub transcript_path: String,
}

/// Read all of `reader` and decode it as JSON.
pub fn from_reader<T, R>(mut reader: R) -> Result<T>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut data = String::new();
    reader
        .read_to_string(&mut data)
        .map_err(|e| VaultError::HookInputError(format!("failed to read input: {}", e)))?;

    serde_json::from_str(&data).map_err(|e| VaultError::HookInputError(e.to_string()))
}

/// Read all of stdin and decode it as JSON.
pub fn read_stdin<T: DeserializeOwned>() -> Result<T> {
    from_reader(std::io::stdin().lock())
}
