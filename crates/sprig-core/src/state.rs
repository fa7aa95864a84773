use sprig_shared::{
  CategoryDto,
  TodoDto
};

use crate::error::ApiError;

/// Per-list load gate: render a
/// placeholder until the first
/// response (success or failure)
/// arrives, then render the loaded
/// state even if it is empty.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum LoadPhase {
  Loading,
  Loaded
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum NoticeKind {
  ListFetchFailed,
  MutationFailed
}

/// Dismissible failure banner. A
/// list-fetch failure may leave the
/// view empty; a mutation failure
/// always leaves prior state intact.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Notice {
  pub kind:    NoticeKind,
  pub message: String
}

/// Every state transition the client
/// performs, in one enum so the view
/// layer can advance a single
/// immutable state object.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum AppAction {
  TodosLoaded(Vec<TodoDto>),
  TodosFetchFailed(ApiError),
  CategoriesLoaded(Vec<CategoryDto>),
  CategoriesFetchFailed(ApiError),
  Created(TodoDto),
  Updated(TodoDto),
  Removed(String),
  MutationFailed {
    context: String,
    error:   ApiError
  },
  NoticeDismissed
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct AppState {
  pub todos:            Vec<TodoDto>,
  pub categories:
    Vec<CategoryDto>,
  pub todos_phase:      LoadPhase,
  pub categories_phase: LoadPhase,
  pub notice:           Option<Notice>
}

impl Default for AppState {
  fn default() -> Self {
    Self::new()
  }
}

impl AppState {
  pub fn new() -> Self {
    Self {
      todos:            vec![],
      categories:       vec![],
      todos_phase:
        LoadPhase::Loading,
      categories_phase:
        LoadPhase::Loading,
      notice:           None
    }
  }

  pub fn apply(
    &mut self,
    action: AppAction
  ) {
    match action {
      | AppAction::TodosLoaded(
        list
      ) => self.todos_loaded(list),
      | AppAction::TodosFetchFailed(
        error
      ) => {
        self.todos_fetch_failed(&error)
      }
      | AppAction::CategoriesLoaded(
        list
      ) => {
        self.categories_loaded(list)
      }
      | AppAction::CategoriesFetchFailed(
        error
      ) => {
        self
          .categories_fetch_failed(
            &error
          )
      }
      | AppAction::Created(todo) => {
        self.todo_created(todo)
      }
      | AppAction::Updated(todo) => {
        self.todo_updated(todo)
      }
      | AppAction::Removed(id) => {
        self.todo_removed(&id)
      }
      | AppAction::MutationFailed {
        context,
        error
      } => {
        self.mutation_failed(
          &context, &error
        )
      }
      | AppAction::NoticeDismissed => {
        self.notice = None;
      }
    }
  }

  pub fn find_todo(
    &self,
    id: &str
  ) -> Option<&TodoDto> {
    self
      .todos
      .iter()
      .find(|todo| todo.id == id)
  }

  fn todos_loaded(
    &mut self,
    list: Vec<TodoDto>
  ) {
    tracing::debug!(
      count = list.len(),
      "todo list loaded"
    );
    self.todos = list;
    self.todos_phase =
      LoadPhase::Loaded;
  }

  /// Initial-load failure renders an
  /// empty-but-valid state; a later
  /// refetch failure keeps the data
  /// already on screen.
  fn todos_fetch_failed(
    &mut self,
    error: &ApiError
  ) {
    tracing::error!(
      error = %error,
      "todo list fetch failed"
    );
    self.todos_phase =
      LoadPhase::Loaded;
    self.notice = Some(Notice {
      kind:
        NoticeKind::ListFetchFailed,
      message: format!(
        "Could not load tasks: {}.",
        error.summary()
      )
    });
  }

  fn categories_loaded(
    &mut self,
    list: Vec<CategoryDto>
  ) {
    tracing::debug!(
      count = list.len(),
      "category list loaded"
    );
    self.categories = list;
    self.categories_phase =
      LoadPhase::Loaded;
  }

  fn categories_fetch_failed(
    &mut self,
    error: &ApiError
  ) {
    tracing::error!(
      error = %error,
      "category list fetch failed"
    );
    self.categories_phase =
      LoadPhase::Loaded;
    self.notice = Some(Notice {
      kind:
        NoticeKind::ListFetchFailed,
      message: format!(
        "Could not load categories: \
         {}.",
        error.summary()
      )
    });
  }

  /// Appends the server-returned
  /// entity, which carries the
  /// authoritative id.
  fn todo_created(
    &mut self,
    created: TodoDto
  ) {
    tracing::info!(
      id = %created.id,
      "todo created"
    );
    self.todos.push(created);
  }

  /// Replaces the matching-id entry
  /// with the server response
  /// verbatim so the view reflects
  /// any server-side normalization.
  fn todo_updated(
    &mut self,
    updated: TodoDto
  ) {
    match self
      .todos
      .iter_mut()
      .find(|todo| {
        todo.id == updated.id
      }) {
      | Some(slot) => {
        tracing::info!(
          id = %updated.id,
          "todo updated"
        );
        *slot = updated;
      }
      | None => {
        tracing::warn!(
          id = %updated.id,
          "update response for a todo \
           not in the local list; \
           ignoring"
        );
      }
    }
  }

  fn todo_removed(
    &mut self,
    id: &str
  ) {
    let before = self.todos.len();
    self
      .todos
      .retain(|todo| todo.id != id);
    tracing::info!(
      id = %id,
      removed = before
        - self.todos.len(),
      "todo removed"
    );
  }

  fn mutation_failed(
    &mut self,
    context: &str,
    error: &ApiError
  ) {
    tracing::error!(
      context,
      error = %error,
      "mutation failed; keeping prior state"
    );
    self.notice = Some(Notice {
      kind:
        NoticeKind::MutationFailed,
      message: format!(
        "{context} failed: {}.",
        error.summary()
      )
    });
  }
}

#[cfg(test)]
mod tests {
  use sprig_shared::TodoDto;

  use super::{
    AppAction,
    AppState,
    LoadPhase,
    NoticeKind
  };
  use crate::error::ApiError;

  fn todo(
    id: &str,
    title: &str
  ) -> TodoDto {
    TodoDto {
      id:          id.to_string(),
      title:       title.to_string(),
      category:    "1".to_string(),
      description: String::new(),
      completed:   false,
      created_at:  "2026-08-01T09:30:00Z"
        .to_string(),
      due_date:    "2026-08-04T00:00:00Z"
        .to_string(),
      status:      "in-progress"
        .to_string()
    }
  }

  fn loaded_state() -> AppState {
    let mut state = AppState::new();
    state.apply(
      AppAction::TodosLoaded(vec![
        todo("1", "first"),
        todo("2", "second"),
      ])
    );
    state
  }

  #[test]
  fn create_appends_server_entity() {
    let mut state = loaded_state();
    let prior = state.todos.clone();

    state.apply(AppAction::Created(
      todo("20260830", "third")
    ));

    assert_eq!(state.todos.len(), 3);
    assert_eq!(
      &state.todos[..2],
      &prior[..]
    );
    assert_eq!(
      state.todos[2].id,
      "20260830"
    );
  }

  #[test]
  fn update_replaces_only_matching_entry()
  {
    let mut state = loaded_state();
    let mut edited =
      todo("2", "second (edited)");
    edited.completed = true;

    state.apply(AppAction::Updated(
      edited.clone()
    ));

    assert_eq!(
      state.todos[0],
      todo("1", "first")
    );
    assert_eq!(
      state.todos[1],
      edited
    );
  }

  #[test]
  fn double_toggle_restores_original()
  {
    let mut state = loaded_state();
    let original =
      state.todos[0].clone();

    let mut flipped = original.clone();
    flipped.completed =
      !flipped.completed;
    state.apply(AppAction::Updated(
      flipped.clone()
    ));
    assert!(state.todos[0].completed);

    flipped.completed =
      !flipped.completed;
    state.apply(AppAction::Updated(
      flipped
    ));
    assert_eq!(
      state.todos[0],
      original
    );
  }

  #[test]
  fn remove_deletes_exactly_one() {
    let mut state = loaded_state();
    state.apply(AppAction::Removed(
      "1".to_string()
    ));

    assert_eq!(state.todos.len(), 1);
    assert_eq!(state.todos[0].id, "2");
  }

  #[test]
  fn update_for_unknown_id_is_a_noop()
  {
    let mut state = loaded_state();
    let before = state.clone();
    state.apply(AppAction::Updated(
      todo("404", "ghost")
    ));
    assert_eq!(state, before);
  }

  #[test]
  fn initial_fetch_failure_is_loaded_empty()
  {
    let mut state = AppState::new();
    assert_eq!(
      state.todos_phase,
      LoadPhase::Loading
    );

    state.apply(
      AppAction::TodosFetchFailed(
        ApiError::Network(
          "connection refused"
            .to_string()
        )
      )
    );

    assert_eq!(
      state.todos_phase,
      LoadPhase::Loaded
    );
    assert!(state.todos.is_empty());
    let notice = state
      .notice
      .as_ref()
      .expect("notice raised");
    assert_eq!(
      notice.kind,
      NoticeKind::ListFetchFailed
    );
  }

  #[test]
  fn refetch_failure_keeps_loaded_data()
  {
    let mut state = loaded_state();
    state.apply(
      AppAction::TodosFetchFailed(
        ApiError::Status(502)
      )
    );

    assert_eq!(state.todos.len(), 2);
    assert!(state.notice.is_some());
  }

  #[test]
  fn mutation_failure_keeps_prior_state()
  {
    let mut state = loaded_state();
    let todos_before =
      state.todos.clone();

    state.apply(
      AppAction::MutationFailed {
        context: "Delete".to_string(),
        error:   ApiError::Status(404)
      }
    );

    assert_eq!(
      state.todos,
      todos_before
    );
    let notice = state
      .notice
      .as_ref()
      .expect("notice raised");
    assert_eq!(
      notice.kind,
      NoticeKind::MutationFailed
    );
    assert!(
      notice
        .message
        .starts_with("Delete failed")
    );
  }

  #[test]
  fn notice_dismissal_clears_banner()
  {
    let mut state = loaded_state();
    state.apply(
      AppAction::MutationFailed {
        context: "Update".to_string(),
        error:   ApiError::Decode(
          "truncated body".to_string()
        )
      }
    );
    state.apply(
      AppAction::NoticeDismissed
    );
    assert!(state.notice.is_none());
  }
}
