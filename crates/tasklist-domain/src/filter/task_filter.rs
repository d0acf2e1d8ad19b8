//! Task filter implementations.
//!
//! Provides the TaskFilter trait and filter implementations for
//! completion status, owner, and title text.

use crate::filter::task_filters::StatusFilter;
use crate::task::Task;

/// Trait for filtering tasks by various criteria.
pub trait TaskFilter {
    /// Returns true if the task matches the filter criteria.
    fn matches(&self, task: &Task) -> bool;
}

/// Filter tasks by completion status.
pub struct StatusIs(pub StatusFilter);

impl TaskFilter for StatusIs {
    fn matches(&self, task: &Task) -> bool {
        match self.0 {
            StatusFilter::All => true,
            StatusFilter::Completed => task.completed,
            StatusFilter::Pending => !task.completed,
        }
    }
}

/// Filter tasks by owner.
pub struct OwnedBy(pub i64);

impl TaskFilter for OwnedBy {
    fn matches(&self, task: &Task) -> bool {
        task.owner_id == self.0
    }
}

/// Filter tasks whose title contains a query, case-insensitively.
///
/// An empty query matches every task.
pub struct TitleContains {
    query: String,
}

impl TitleContains {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl TaskFilter for TitleContains {
    fn matches(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        task.title.to_lowercase().contains(&self.query)
    }
}

/// Combine multiple filters with AND logic.
///
/// A task matches only if it passes all filters.
pub struct CompositeFilter {
    filters: Vec<Box<dyn TaskFilter>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches all tasks).
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    /// Add a filter to the composite (builder pattern).
    pub fn with_filter(mut self, filter: Box<dyn TaskFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Check if the composite has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskFilter for CompositeFilter {
    fn matches(&self, task: &Task) -> bool {
        // Empty filter matches all tasks
        if self.filters.is_empty() {
            return true;
        }
        self.filters.iter().all(|f| f.matches(task))
    }
}
