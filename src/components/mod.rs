//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod stats_panel;
mod new_task_form;
mod progress_bar;
mod task_row;
mod task_list;
mod completion_notice;

pub use header::Header;
pub use stats_panel::StatsPanel;
pub use new_task_form::NewTaskForm;
pub use progress_bar::ProgressBar;
pub use task_row::TaskRow;
pub use task_list::TaskList;
pub use completion_notice::{CompletionNotice, CompletionNoticeView};
