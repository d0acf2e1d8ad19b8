use clap::{Parser, ValueEnum};
use tasklist_core::{TasklistError, TasklistResult};
use tasklist_domain::{StatusFilter, TaskId, DEFAULT_NEIGHBOR_RADIUS, DEFAULT_PAGE_SIZE};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Render a paginated, filterable task list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the JSON task dataset (or set TASKLIST_FILE env var)
    #[arg(value_name = "FILE", env = "TASKLIST_FILE")]
    pub file: String,

    /// Page to display (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Records per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Page numbers shown on each side of the current page
    #[arg(long, default_value_t = DEFAULT_NEIGHBOR_RADIUS)]
    pub neighbors: usize,

    /// Only show tasks with this completion status
    #[arg(long, value_enum, default_value = "all")]
    pub status: StatusArg,

    /// Only show tasks owned by this owner id
    #[arg(long)]
    pub owner: Option<i64>,

    /// Only show tasks whose title contains this text (case-insensitive)
    #[arg(long)]
    pub query: Option<String>,

    /// Move a task onto another task's slot before rendering
    /// (repeatable, applied in order)
    #[arg(long = "move", value_name = "DRAGGED:TARGET")]
    pub moves: Vec<String>,

    /// Emit the page as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    All,
    Completed,
    Pending,
}

impl From<StatusArg> for StatusFilter {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::All => StatusFilter::All,
            StatusArg::Completed => StatusFilter::Completed,
            StatusArg::Pending => StatusFilter::Pending,
        }
    }
}

/// Parse a `DRAGGED:TARGET` move spec into a pair of task ids.
pub fn parse_move(spec: &str) -> TasklistResult<(TaskId, TaskId)> {
    let (dragged, target) = spec.split_once(':').ok_or_else(|| {
        TasklistError::Validation(format!("expected DRAGGED:TARGET, got '{spec}'"))
    })?;
    let dragged = dragged
        .trim()
        .parse()
        .map_err(|_| TasklistError::Validation(format!("invalid dragged id '{dragged}'")))?;
    let target = target
        .trim()
        .parse()
        .map_err(|_| TasklistError::Validation(format!("invalid target id '{target}'")))?;
    Ok((dragged, target))
}
