//! Task filtering functionality.
//!
//! Provides traits and implementations for filtering tasks by various
//! criteria, plus the filter configuration value the UI mutates.

pub mod task_filter;
pub mod task_filters;

pub use task_filter::{CompositeFilter, OwnedBy, StatusIs, TaskFilter, TitleContains};
pub use task_filters::{StatusFilter, TaskFilters};
