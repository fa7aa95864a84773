use chrono_tz::Tz;
use sprig_core::view::partition_by_status;
use sprig_shared::{
  CategoryDto,
  TodoDto,
  TodoStatus
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::KanbanColumn;

#[derive(Properties, PartialEq)]
pub struct KanbanBoardProps {
  pub todos:      Vec<TodoDto>,
  pub categories: Vec<CategoryDto>,
  pub timezone:   Tz,
  pub on_toggle:  Callback<TodoDto>,
  pub on_edit:    Callback<TodoDto>,
  pub on_delete:  Callback<String>
}

#[function_component(KanbanBoard)]
pub fn kanban_board(
  props: &KanbanBoardProps
) -> Html {
  // Todos outside the three
  // recognized statuses are not
  // rendered in this view.
  let columns =
    partition_by_status(&props.todos);

  html! {
      <div class="panel kanban-panel">
          <div class="header">{ "Kanban" }</div>
          <div class="kanban-board">
              {
                  for TodoStatus::all().into_iter().map(|status| {
                      let cards = columns.for_status(status).to_vec();
                      html! {
                          <KanbanColumn
                              status={status}
                              cards={cards}
                              categories={props.categories.clone()}
                              timezone={props.timezone}
                              on_toggle={props.on_toggle.clone()}
                              on_edit={props.on_edit.clone()}
                              on_delete={props.on_delete.clone()}
                          />
                      }
                  })
              }
          </div>
      </div>
  }
}
