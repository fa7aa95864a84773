use std::rc::Rc;

use chrono::Utc;
use chrono_tz::Tz;
use gloo::storage::{
  LocalStorage,
  Storage
};
use sprig_core::config::Config;
use sprig_core::datetime;
use sprig_core::state::{
  AppAction,
  AppState,
  LoadPhase
};
use sprig_shared::{
  TodoCreate,
  TodoDto,
  TodoStatus
};
use wasm_bindgen_futures::spawn_local;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Reducible,
  UseReducerDispatcher,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};

use crate::api::TodoApi;
use crate::components::{
  KanbanBoard,
  ModalMode,
  ModalState,
  NoticeBanner,
  TaskModal,
  TodoList,
  WorkspaceTabs
};

const CONFIG_TOML: &str =
  include_str!("../assets/sprig.toml");

const TAB_STORAGE_KEY: &str =
  "sprig.workspace_tab";

const LIST_TAB: &str = "list";
const KANBAN_TAB: &str = "kanban";

/// One immutable state value advanced
/// only through dispatched actions.
/// The two startup fetches finish in
/// either order without clobbering
/// each other.
#[derive(Clone, PartialEq)]
struct SharedAppState(AppState);

impl Reducible for SharedAppState {
  type Action = AppAction;

  fn reduce(
    self: Rc<Self>,
    action: AppAction
  ) -> Rc<Self> {
    let mut inner = self.0.clone();
    inner.apply(action);
    Rc::new(Self(inner))
  }
}

fn stored_tab() -> String {
  LocalStorage::get::<String>(
    TAB_STORAGE_KEY
  )
  .unwrap_or_else(|_| {
    LIST_TAB.to_string()
  })
}

fn fetch_todos(
  api: TodoApi,
  dispatcher: UseReducerDispatcher<
    SharedAppState
  >
) {
  spawn_local(async move {
    match api.list_todos().await {
      | Ok(list) => {
        dispatcher.dispatch(
          AppAction::TodosLoaded(list)
        );
      }
      | Err(error) => {
        dispatcher.dispatch(
          AppAction::TodosFetchFailed(
            error
          )
        );
      }
    }
  });
}

fn fetch_categories(
  api: TodoApi,
  dispatcher: UseReducerDispatcher<
    SharedAppState
  >
) {
  spawn_local(async move {
    match api.list_categories().await {
      | Ok(list) => {
        dispatcher.dispatch(
          AppAction::CategoriesLoaded(
            list
          )
        );
      }
      | Err(error) => {
        dispatcher.dispatch(
          AppAction::CategoriesFetchFailed(
            error
          )
        );
      }
    }
  });
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_state(|| {
    Config::from_toml_str(CONFIG_TOML)
  });
  let state = use_reducer(|| {
    SharedAppState(AppState::new())
  });
  let active_tab =
    use_state(stored_tab);
  let modal_state = use_state(
    || None::<ModalState>
  );
  let modal_busy =
    use_state(|| false);

  let api = TodoApi::new(
    &config.backend_base_url
  );
  let timezone: Tz = config.timezone;

  {
    let api = api.clone();
    let dispatcher =
      state.dispatcher();
    use_effect_with((), move |_| {
      fetch_todos(
        api.clone(),
        dispatcher.clone()
      );
      fetch_categories(
        api, dispatcher
      );
    });
  }

  let on_tab_nav = {
    let active_tab =
      active_tab.clone();
    Callback::from(
      move |tab: String| {
        if let Err(err) =
          LocalStorage::set(
            TAB_STORAGE_KEY,
            &tab
          )
        {
          tracing::warn!(
            error = %err,
            "failed to persist active tab"
          );
        }
        active_tab.set(tab);
      }
    )
  };

  let on_refresh = {
    let api = api.clone();
    let dispatcher =
      state.dispatcher();
    Callback::from(
      move |_: MouseEvent| {
        fetch_todos(
          api.clone(),
          dispatcher.clone()
        );
        fetch_categories(
          api.clone(),
          dispatcher.clone()
        );
      }
    )
  };

  let on_notice_dismiss = {
    let dispatcher =
      state.dispatcher();
    Callback::from(
      move |_: MouseEvent| {
        dispatcher.dispatch(
          AppAction::NoticeDismissed
        );
      }
    )
  };

  let on_add_click = {
    let modal_state =
      modal_state.clone();
    let state = state.clone();
    Callback::from(
      move |_: MouseEvent| {
        let draft_category = state
          .0
          .categories
          .first()
          .map(|category| {
            category.id.clone()
          })
          .unwrap_or_default();
        modal_state.set(Some(
          ModalState {
            mode: ModalMode::Add,
            draft_title:
              String::new(),
            draft_category,
            draft_desc:
              String::new(),
            draft_due:
              datetime::default_due_input(
                Utc::now(),
                timezone
              ),
            error: None
          }
        ));
      }
    )
  };

  let on_edit_click = {
    let modal_state =
      modal_state.clone();
    Callback::from(
      move |todo: TodoDto| {
        // An unparseable stored due
        // date prefills raw so the
        // user can correct it.
        let draft_due =
          match datetime::parse_wire(
            &todo.due_date
          ) {
            | Ok(dt) => {
              datetime::utc_to_local_input(
                dt, timezone
              )
            }
            | Err(err) => {
              tracing::warn!(
                error = %err,
                id = %todo.id,
                "unparseable stored due date"
              );
              todo.due_date.clone()
            }
          };
        modal_state.set(Some(
          ModalState {
            mode: ModalMode::Edit(
              todo.id.clone()
            ),
            draft_title: todo
              .title
              .clone(),
            draft_category: todo
              .category
              .clone(),
            draft_desc: todo
              .description
              .clone(),
            draft_due,
            error: None
          }
        ));
      }
    )
  };

  let on_modal_close = {
    let modal_state =
      modal_state.clone();
    Callback::from(
      move |_: MouseEvent| {
        modal_state.set(None);
      }
    )
  };

  let on_modal_submit = {
    let api = api.clone();
    let dispatcher =
      state.dispatcher();
    let state = state.clone();
    let modal_state =
      modal_state.clone();
    let modal_busy =
      modal_busy.clone();
    Callback::from(
      move |draft: ModalState| {
        let reject =
          |message: &str| {
            let mut rejected =
              draft.clone();
            rejected.error = Some(
              message.to_string()
            );
            modal_state
              .set(Some(rejected));
          };

        let title = draft
          .draft_title
          .trim()
          .to_string();
        if title.is_empty() {
          reject(
            "Title is required."
          );
          return;
        }
        if draft
          .draft_category
          .is_empty()
        {
          reject(
            "Pick a category."
          );
          return;
        }
        let due =
          match datetime::local_input_to_utc(
            &draft.draft_due,
            timezone
          ) {
            | Ok(due) => due,
            | Err(err) => {
              tracing::warn!(
                error = %err,
                "rejected due date input"
              );
              reject(
                "Enter a valid due \
                 date and time."
              );
              return;
            }
          };
        let due_date =
          datetime::format_wire(due);

        let api = api.clone();
        let dispatcher =
          dispatcher.clone();
        let modal_state =
          modal_state.clone();
        let modal_busy =
          modal_busy.clone();
        let description = draft
          .draft_desc
          .clone();
        let category = draft
          .draft_category
          .clone();

        match draft.mode.clone() {
          | ModalMode::Add => {
            let create = TodoCreate {
              title,
              category,
              description,
              completed: false,
              due_date,
              status:
                TodoStatus::InProgress
                  .as_wire()
                  .to_string()
            };
            modal_busy.set(true);
            spawn_local(async move {
              match api
                .create_todo(&create)
                .await
              {
                | Ok(created) => {
                  dispatcher.dispatch(
                    AppAction::Created(
                      created
                    )
                  );
                  modal_state
                    .set(None);
                }
                | Err(error) => {
                  let mut failed =
                    draft.clone();
                  failed.error =
                    Some(format!(
                      "Save failed: \
                       {}.",
                      error.summary()
                    ));
                  modal_state.set(
                    Some(failed)
                  );
                }
              }
              modal_busy.set(false);
            });
          }
          | ModalMode::Edit(id) => {
            let Some(base) =
              state.0.find_todo(&id)
            else {
              reject(
                "This task no \
                 longer exists."
              );
              return;
            };
            // Full replace: fields
            // the form does not edit
            // go back unchanged.
            let mut updated =
              base.clone();
            updated.title = title;
            updated.category =
              category;
            updated.description =
              description;
            updated.due_date =
              due_date;

            modal_busy.set(true);
            spawn_local(async move {
              match api
                .update_todo(&updated)
                .await
              {
                | Ok(fresh) => {
                  dispatcher.dispatch(
                    AppAction::Updated(
                      fresh
                    )
                  );
                  modal_state
                    .set(None);
                }
                | Err(error) => {
                  let mut failed =
                    draft.clone();
                  failed.error =
                    Some(format!(
                      "Save failed: \
                       {}.",
                      error.summary()
                    ));
                  modal_state.set(
                    Some(failed)
                  );
                }
              }
              modal_busy.set(false);
            });
          }
        }
      }
    )
  };

  let on_toggle = {
    let api = api.clone();
    let dispatcher =
      state.dispatcher();
    Callback::from(
      move |todo: TodoDto| {
        let mut flipped = todo;
        flipped.completed =
          !flipped.completed;

        let api = api.clone();
        let dispatcher =
          dispatcher.clone();
        spawn_local(async move {
          match api
            .update_todo(&flipped)
            .await
          {
            | Ok(fresh) => {
              dispatcher.dispatch(
                AppAction::Updated(
                  fresh
                )
              );
            }
            | Err(error) => {
              dispatcher.dispatch(
                AppAction::MutationFailed {
                  context: "Update"
                    .to_string(),
                  error
                }
              );
            }
          }
        });
      }
    )
  };

  let on_delete = {
    let api = api.clone();
    let dispatcher =
      state.dispatcher();
    Callback::from(
      move |id: String| {
        let api = api.clone();
        let dispatcher =
          dispatcher.clone();
        spawn_local(async move {
          match api
            .delete_todo(&id)
            .await
          {
            | Ok(()) => {
              dispatcher.dispatch(
                AppAction::Removed(id)
              );
            }
            | Err(error) => {
              dispatcher.dispatch(
                AppAction::MutationFailed {
                  context: "Delete"
                    .to_string(),
                  error
                }
              );
            }
          }
        });
      }
    )
  };

  let loading = state.0.todos_phase
    == LoadPhase::Loading;
  let kanban_active =
    *active_tab == KANBAN_TAB;

  html! {
      <div class="app-shell">
          <div class="topbar">
              <div class="brand">{ "Sprig" }</div>
              <WorkspaceTabs
                  active={(*active_tab).clone()}
                  on_nav={on_tab_nav}
              />
              <div class="topbar-actions">
                  <button type="button" class="btn" onclick={on_refresh}>
                      { "Refresh" }
                  </button>
                  <button type="button" class="btn primary" onclick={on_add_click}>
                      { "Add Task" }
                  </button>
              </div>
          </div>
          {
              if let Some(notice) = state.0.notice.clone() {
                  html! {
                      <NoticeBanner
                          notice={notice}
                          on_dismiss={on_notice_dismiss}
                      />
                  }
              } else {
                  html! {}
              }
          }
          {
              if loading {
                  html! { <div class="loading">{ "Loading tasks..." }</div> }
              } else if kanban_active {
                  html! {
                      <KanbanBoard
                          todos={state.0.todos.clone()}
                          categories={state.0.categories.clone()}
                          timezone={timezone}
                          on_toggle={on_toggle}
                          on_edit={on_edit_click}
                          on_delete={on_delete}
                      />
                  }
              } else {
                  html! {
                      <TodoList
                          todos={state.0.todos.clone()}
                          categories={state.0.categories.clone()}
                          timezone={timezone}
                          on_toggle={on_toggle}
                          on_edit={on_edit_click}
                          on_delete={on_delete}
                      />
                  }
              }
          }
          <TaskModal
              state_handle={modal_state.clone()}
              busy={*modal_busy}
              categories={state.0.categories.clone()}
              on_submit={on_modal_submit}
              on_close={on_modal_close}
          />
      </div>
  }
}
