use serde::{Deserialize, Serialize};

pub type TaskId = i64;

/// A single task record.
///
/// Identity is the `id` field, unique and stable for the life of the
/// session. The record itself is never edited by the list core; only
/// its position within the owning list changes.
///
/// The serde mapping matches the seed dataset wire schema
/// (`{"userId": .., "id": .., "title": .., "completed": ..}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(rename = "userId")]
    pub owner_id: i64,
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, owner_id: i64, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            owner_id,
            title: title.into(),
            completed,
        }
    }
}
