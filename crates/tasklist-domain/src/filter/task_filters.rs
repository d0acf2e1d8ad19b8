//! Task filter configuration.
//!
//! Provides the TaskFilters struct which holds filter settings for the
//! visible subset, as opposed to TaskFilter trait implementations which
//! perform the actual matching.

use crate::filter::task_filter::{CompositeFilter, OwnedBy, StatusIs, TitleContains};

/// Completion status constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// No status constraint.
    #[default]
    All,
    /// Only completed tasks.
    Completed,
    /// Only tasks not yet completed.
    Pending,
}

/// Configuration for filtering tasks.
///
/// A pure value: recomputing the visible subset from the same task list
/// and the same `TaskFilters` always yields the same result. Every
/// field defaults to "no constraint"; active fields combine with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilters {
    /// Constraint on the completion status.
    pub status: StatusFilter,
    /// Only tasks owned by this owner.
    pub owner: Option<i64>,
    /// Only tasks whose title contains this text (case-insensitive).
    pub query: Option<String>,
}

impl TaskFilters {
    /// Create a new empty filter configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any filters are active.
    pub fn has_active_filters(&self) -> bool {
        self.status != StatusFilter::All
            || self.owner.is_some()
            || self.query.as_ref().is_some_and(|q| !q.is_empty())
    }

    /// Clear all filters.
    pub fn clear(&mut self) {
        self.status = StatusFilter::All;
        self.owner = None;
        self.query = None;
    }

    /// Build the composite predicate from the active fields only.
    pub fn to_composite(&self) -> CompositeFilter {
        let mut composite = CompositeFilter::new();
        if self.status != StatusFilter::All {
            composite = composite.with_filter(Box::new(StatusIs(self.status)));
        }
        if let Some(owner) = self.owner {
            composite = composite.with_filter(Box::new(OwnedBy(owner)));
        }
        if let Some(query) = self.query.as_deref() {
            if !query.is_empty() {
                composite = composite.with_filter(Box::new(TitleContains::new(query)));
            }
        }
        composite
    }
}
