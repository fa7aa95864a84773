use chrono_tz::Tz;
use sprig_core::datetime;

mod category_swatch;
mod kanban_board;
mod kanban_card;
mod kanban_column;
mod notice_banner;
mod task_modal;
mod todo_list;
mod todo_list_row;
mod workspace_tabs;

pub use category_swatch::CategorySwatch;
pub use kanban_board::KanbanBoard;
pub use kanban_card::KanbanCard;
pub use kanban_column::KanbanColumn;
pub use notice_banner::NoticeBanner;
pub use task_modal::{
  ModalMode,
  ModalState,
  TaskModal
};
pub use todo_list::TodoList;
pub use todo_list_row::TodoListRow;
pub use workspace_tabs::WorkspaceTabs;

/// Due date text for rows and cards.
/// A stored value that fails to
/// parse is shown raw rather than
/// dropped.
pub(crate) fn due_label(
  raw: &str,
  timezone: Tz
) -> String {
  match datetime::parse_wire(raw) {
    | Ok(dt) => {
      datetime::format_display(
        dt, timezone
      )
    }
    | Err(err) => {
      tracing::warn!(
        error = %err,
        raw,
        "unparseable due date; showing raw value"
      );
      raw.to_string()
    }
  }
}
