pub mod error;
pub mod pagination;
pub mod result;

pub use error::TasklistError;
pub use pagination::{gap_jump, page_window, total_pages, PageToken};
pub use result::TasklistResult;
