use sprig_shared::{
  CategoryDto,
  TodoDto,
  TodoStatus
};

/// Swatch color used when a todo's
/// category id matches no known
/// category.
pub const FALLBACK_SWATCH_COLOR:
  &str = "#CCCCCC";

pub fn category_color<'a>(
  categories: &'a [CategoryDto],
  category_id: &str
) -> &'a str {
  categories
    .iter()
    .find(|category| {
      category.id == category_id
    })
    .map(|category| {
      category.color.as_str()
    })
    .unwrap_or(FALLBACK_SWATCH_COLOR)
}

/// The three fixed kanban columns,
/// each in input order. A todo whose
/// status matches none of the
/// recognized values appears in no
/// column.
#[derive(
  Debug, Clone, Default, PartialEq,
)]
pub struct StatusColumns {
  pub in_progress: Vec<TodoDto>,
  pub waiting:     Vec<TodoDto>,
  pub done:        Vec<TodoDto>
}

impl StatusColumns {
  pub fn for_status(
    &self,
    status: TodoStatus
  ) -> &[TodoDto] {
    match status {
      | TodoStatus::InProgress => {
        &self.in_progress
      }
      | TodoStatus::Waiting => {
        &self.waiting
      }
      | TodoStatus::Done => &self.done
    }
  }
}

pub fn partition_by_status(
  todos: &[TodoDto]
) -> StatusColumns {
  let mut columns =
    StatusColumns::default();

  for todo in todos {
    match todo.kanban_status() {
      | Some(
        TodoStatus::InProgress
      ) => {
        columns
          .in_progress
          .push(todo.clone());
      }
      | Some(TodoStatus::Waiting) => {
        columns
          .waiting
          .push(todo.clone());
      }
      | Some(TodoStatus::Done) => {
        columns
          .done
          .push(todo.clone());
      }
      | None => {
        tracing::debug!(
          id = %todo.id,
          status = %todo.status,
          "todo has no recognized status; hidden from kanban view"
        );
      }
    }
  }

  columns
}
