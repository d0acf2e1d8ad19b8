use serde::Serialize;
use tasklist_core::PageToken;
use tasklist_domain::{ListController, Task};

#[derive(Serialize)]
struct PageResponse<'a> {
    page: usize,
    total_pages: usize,
    visible: usize,
    tasks: Vec<&'a Task>,
    window: Vec<PageToken>,
}

pub fn print_json(controller: &ListController) -> anyhow::Result<()> {
    let response = PageResponse {
        page: controller.current_page(),
        total_pages: controller.total_pages(),
        visible: controller.visible_count(),
        tasks: controller.current_page_slice(),
        window: controller.page_window(),
    };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub fn print_table(controller: &ListController) {
    let slice = controller.current_page_slice();

    println!(
        "Viewing {} of {} tasks    Page {} of {}",
        slice.len(),
        controller.visible_count(),
        controller.current_page(),
        controller.total_pages().max(1)
    );
    println!("{:>6}  {:>6}  {:<9}  TITLE", "ID", "OWNER", "STATUS");
    for task in &slice {
        println!(
            "{:>6}  {:>6}  {:<9}  {}",
            task.id,
            task.owner_id,
            if task.completed { "completed" } else { "pending" },
            task.title
        );
    }
    if slice.is_empty() {
        println!("  (no tasks on this page)");
    }
    println!(
        "{}",
        render_strip(&controller.page_window(), controller.current_page())
    );
}

fn render_strip(window: &[PageToken], current_page: usize) -> String {
    window
        .iter()
        .map(|token| match token {
            PageToken::Page(n) if *n == current_page => format!("[{n}]"),
            PageToken::Page(n) => n.to_string(),
            PageToken::LeftGap => "\u{ab}".to_string(),
            PageToken::RightGap => "\u{bb}".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
