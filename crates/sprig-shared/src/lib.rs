use serde::{
  Deserialize,
  Serialize
};

/// The three statuses the kanban
/// board recognizes. The wire keeps
/// status as a free string so values
/// outside this set survive a
/// full-object PUT replace untouched.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub enum TodoStatus {
  InProgress,
  Waiting,
  Done
}

impl TodoStatus {
  pub fn all() -> [Self; 3] {
    [
      Self::InProgress,
      Self::Waiting,
      Self::Done
    ]
  }

  pub fn as_wire(
    self
  ) -> &'static str {
    match self {
      | Self::InProgress => {
        "in-progress"
      }
      | Self::Waiting => "waiting",
      | Self::Done => "done"
    }
  }

  pub fn from_wire(
    raw: &str
  ) -> Option<Self> {
    match raw.trim() {
      | "in-progress" => {
        Some(Self::InProgress)
      }
      | "waiting" => {
        Some(Self::Waiting)
      }
      | "done" => Some(Self::Done),
      | _ => None
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::InProgress => {
        "In Progress"
      }
      | Self::Waiting => "Waiting",
      | Self::Done => "Done"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TodoDto {
  pub id:          String,
  #[serde(default)]
  pub title:       String,
  #[serde(default)]
  pub category:    String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub completed:   bool,
  #[serde(default)]
  pub created_at:  String,
  #[serde(default)]
  pub due_date:    String,
  #[serde(default)]
  pub status:      String
}

impl TodoDto {
  pub fn kanban_status(
    &self
  ) -> Option<TodoStatus> {
    TodoStatus::from_wire(&self.status)
  }
}

/// POST body: a todo minus the
/// server-assigned id and created_at.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TodoCreate {
  pub title:       String,
  pub category:    String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub completed:   bool,
  pub due_date:    String,
  #[serde(default)]
  pub status:      String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct CategoryDto {
  pub id:    String,
  #[serde(default)]
  pub name:  String,
  #[serde(default)]
  pub color: String
}

#[cfg(test)]
mod tests {
  use super::{
    CategoryDto,
    TodoDto,
    TodoStatus
  };

  #[test]
  fn decodes_backend_todo_shape() {
    let raw = r#"{
      "id": "1",
      "title": "Write report",
      "category": "2",
      "completed": false,
      "created_at": "2026-08-01T09:30:00Z",
      "due_date": "2026-08-04T00:00:00Z",
      "description": "quarterly"
    }"#;
    let todo: TodoDto =
      serde_json::from_str(raw)
        .expect("decode todo");
    assert_eq!(todo.id, "1");
    assert_eq!(todo.category, "2");
    assert!(!todo.completed);
    assert_eq!(todo.status, "");
    assert_eq!(
      todo.kanban_status(),
      None
    );
  }

  #[test]
  fn unrecognized_status_round_trips()
  {
    let raw = r#"{
      "id": "7",
      "title": "Odd one",
      "due_date": "2026-08-04T00:00:00Z",
      "status": "blocked"
    }"#;
    let todo: TodoDto =
      serde_json::from_str(raw)
        .expect("decode todo");
    assert_eq!(
      todo.kanban_status(),
      None
    );

    let encoded =
      serde_json::to_string(&todo)
        .expect("encode todo");
    assert!(
      encoded
        .contains(r#""status":"blocked""#)
    );
  }

  #[test]
  fn status_wire_values_match_backend()
  {
    for status in TodoStatus::all() {
      assert_eq!(
        TodoStatus::from_wire(
          status.as_wire()
        ),
        Some(status)
      );
    }
    assert_eq!(
      TodoStatus::from_wire("deleted"),
      None
    );
  }

  #[test]
  fn category_tolerates_missing_fields()
  {
    let raw = r#"{ "id": "9" }"#;
    let category: CategoryDto =
      serde_json::from_str(raw)
        .expect("decode category");
    assert_eq!(category.name, "");
    assert_eq!(category.color, "");
  }
}
