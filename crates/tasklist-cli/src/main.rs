mod cli;
mod output;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use tasklist_domain::{ListController, TaskFilters};

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKLIST_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    let bytes = std::fs::read(&cli.file)
        .with_context(|| format!("failed to read task dataset {}", cli.file))?;
    let tasks = tasklist_domain::load_tasks(&bytes);
    tracing::info!("Loaded {} tasks from {}", tasks.len(), cli.file);

    let mut controller = ListController::with_layout(tasks, cli.page_size, cli.neighbors);

    let filters = TaskFilters {
        status: cli.status.into(),
        owner: cli.owner,
        query: cli.query.clone(),
    };
    if filters.has_active_filters() {
        controller.set_filters(filters);
    }

    for spec in &cli.moves {
        let (dragged, target) = cli::parse_move(spec)?;
        controller.begin_drag(dragged);
        controller.drop_onto(target);
        tracing::debug!("Moved task {dragged} onto the slot of task {target}");
    }

    controller.set_current_page(cli.page);

    if cli.json {
        output::print_json(&controller)?;
    } else {
        output::print_table(&controller);
    }

    Ok(())
}
