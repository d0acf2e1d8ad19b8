pub mod controller;
pub mod filter;
pub mod seed;
pub mod task;

pub use controller::{DragSession, ListController, DEFAULT_NEIGHBOR_RADIUS, DEFAULT_PAGE_SIZE};
pub use filter::{StatusFilter, TaskFilters};
pub use seed::{load_tasks, parse_tasks, read_tasks};
pub use task::{Task, TaskId};
