//! Seed dataset loading.
//!
//! The task list is seeded once per session from a static JSON array.
//! Malformed data must never take the whole application down, so the
//! lenient entry point degrades to an empty list and logs instead.

use std::path::Path;

use tasklist_core::{TasklistError, TasklistResult};

use crate::task::Task;

/// Strict parse of a JSON task array.
pub fn parse_tasks(bytes: &[u8]) -> TasklistResult<Vec<Task>> {
    serde_json::from_slice(bytes).map_err(|e| TasklistError::Serialization(e.to_string()))
}

/// Lenient parse: malformed seed data (not an array, or elements with
/// missing fields) yields an empty list instead of an error.
pub fn load_tasks(bytes: &[u8]) -> Vec<Task> {
    match parse_tasks(bytes) {
        Ok(tasks) => tasks,
        Err(e) => {
            tracing::warn!("Malformed seed data, starting with an empty task list: {e}");
            Vec::new()
        }
    }
}

/// Read and strictly parse a seed file.
pub fn read_tasks(path: impl AsRef<Path>) -> TasklistResult<Vec<Task>> {
    let bytes = std::fs::read(path)?;
    parse_tasks(&bytes)
}
