//! JSON state snapshots.
//!
//! A CLI invocation is one short-lived process; the snapshot file is what
//! lets consecutive invocations observe each other's writes.

use std::fs;
use std::path::Path;

use desk_core::error::StoreError;
use tracing::debug;

use crate::mem::{MemStore, StoreState};

/// Write the full store state to `path` as JSON.
pub fn save_state(store: &MemStore, path: &Path) -> Result<(), StoreError> {
    let state = store.snapshot();
    let json = serde_json::to_string_pretty(&state)
        .map_err(|e| StoreError::Serialization(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, json)?;
    debug!(path = %path.display(), "state snapshot written");
    Ok(())
}

/// Read a store state back from `path`.
pub fn load_state(path: &Path) -> Result<StoreState, StoreError> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| StoreError::Serialization(e.to_string()))
}
