//! List control: owns the canonical task list and derives the
//! filtered, paginated view from it.
//!
//! The controller is a synchronous state machine. Every operation runs
//! to completion in response to one user interaction event; there is no
//! background work and no partial state. Reorder operations mutate the
//! canonical list directly, the filtered and paged views are recomputed
//! from scratch on demand.

use tasklist_core::{gap_jump, page_window, total_pages, PageToken};

use crate::filter::{TaskFilter, TaskFilters};
use crate::task::{Task, TaskId};

/// Records shown per page, matching the seed dataset's table layout.
pub const DEFAULT_PAGE_SIZE: usize = 5;
/// Page numbers shown on each side of the current page.
pub const DEFAULT_NEIGHBOR_RADIUS: usize = 2;

/// Transient state for an in-flight drag gesture.
///
/// Exists only between `begin_drag` and the gesture's exit path (drop,
/// cancel, or drag-end); a single optional session value rules out
/// inconsistent flag combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// The task being dragged.
    pub dragged_id: TaskId,
    /// Absolute index currently hovered, for visual feedback only.
    pub hover_index: Option<usize>,
}

/// Owns the canonical, manually-ordered task list and the view state
/// layered on top of it (filters, current page, drag session).
///
/// The canonical order is authoritative: filters derive an
/// order-preserving subsequence from it, and reorder operations splice
/// the canonical list itself, never the filtered view.
pub struct ListController {
    tasks: Vec<Task>,
    filters: TaskFilters,
    current_page: usize,
    page_size: usize,
    neighbor_radius: usize,
    drag: Option<DragSession>,
}

impl ListController {
    /// Create a controller over a seeded task list with default layout.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self::with_layout(tasks, DEFAULT_PAGE_SIZE, DEFAULT_NEIGHBOR_RADIUS)
    }

    /// Create a controller with an explicit page size and neighbor
    /// radius. Both are fixed for the controller's lifetime.
    pub fn with_layout(tasks: Vec<Task>, page_size: usize, neighbor_radius: usize) -> Self {
        Self {
            tasks,
            filters: TaskFilters::default(),
            current_page: 1,
            page_size,
            neighbor_radius,
            drag: None,
        }
    }

    /// The canonical task list, in its current manual order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filters(&self) -> &TaskFilters {
        &self.filters
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Replace the filter configuration and reset to the first page.
    ///
    /// The reset keeps the current page within the freshly derived page
    /// count, whatever the new filters leave visible.
    pub fn set_filters(&mut self, filters: TaskFilters) {
        self.filters = filters;
        self.current_page = 1;
    }

    /// The filtered view: an order-preserving subsequence of the
    /// canonical list containing the tasks that pass every active
    /// filter.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        let composite = self.filters.to_composite();
        self.tasks.iter().filter(|t| composite.matches(t)).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_tasks().len()
    }

    /// Number of pages the filtered view occupies.
    pub fn total_pages(&self) -> usize {
        total_pages(self.visible_count(), self.page_size)
    }

    /// The tasks on the current page: at most `page_size` entries.
    ///
    /// Out-of-range pages yield an empty slice, never a panic; the
    /// presentation layer renders that as an empty state.
    pub fn current_page_slice(&self) -> Vec<&Task> {
        let start = self.current_page.saturating_sub(1) * self.page_size;
        self.visible_tasks()
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    /// Set the current page without clamping. Callers are expected to
    /// pass values produced by this controller's own page window.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// The pagination strip for the filtered view.
    pub fn page_window(&self) -> Vec<PageToken> {
        page_window(
            self.visible_count(),
            self.page_size,
            self.neighbor_radius,
            self.current_page,
        )
    }

    /// Navigate according to an activated page token: numeric tokens go
    /// to their page, gap tokens apply the coarse window jump.
    pub fn activate_token(&mut self, token: PageToken) {
        self.current_page = gap_jump(token, self.neighbor_radius, self.current_page);
    }

    /// Open a drag session for the given task.
    ///
    /// Starting a new gesture replaces any session left over from one
    /// that never saw a drop.
    pub fn begin_drag(&mut self, dragged_id: TaskId) {
        self.drag = Some(DragSession {
            dragged_id,
            hover_index: None,
        });
    }

    /// Record the hovered index for drop-target highlighting. No list
    /// mutation; ignored when no drag is active.
    pub fn hover_at(&mut self, index: usize) {
        if let Some(session) = &mut self.drag {
            session.hover_index = Some(index);
        }
    }

    /// Clear the hover highlight when the pointer leaves a row without
    /// dropping. The session itself stays open.
    pub fn clear_hover(&mut self) {
        if let Some(session) = &mut self.drag {
            session.hover_index = None;
        }
    }

    /// Abandon the drag gesture without touching the list.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Complete the drag gesture by moving the dragged task to the slot
    /// the target task occupies.
    ///
    /// Splice semantics: the dragged task is removed at its current
    /// index and reinserted at the index the target held *before* the
    /// removal, shifting the target and everything between by one slot.
    /// This is a move, never a swap.
    ///
    /// Dropping with no open session, onto the dragged task itself, or
    /// onto an id absent from the list is a no-op. The session is
    /// cleared on every path out of here.
    pub fn drop_onto(&mut self, target_id: TaskId) {
        let Some(session) = self.drag.take() else {
            return;
        };
        if session.dragged_id == target_id {
            return;
        }

        let dragged_index = self.tasks.iter().position(|t| t.id == session.dragged_id);
        let target_index = self.tasks.iter().position(|t| t.id == target_id);

        if let (Some(from), Some(to)) = (dragged_index, target_index) {
            let task = self.tasks.remove(from);
            self.tasks.insert(to, task);
        } else {
            tracing::debug!(
                dragged_id = session.dragged_id,
                target_id,
                "Drop referenced an unknown task id, ignoring"
            );
        }
    }
}
