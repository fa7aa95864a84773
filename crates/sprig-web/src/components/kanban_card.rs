use chrono_tz::Tz;
use sprig_shared::TodoDto;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::{
  CategorySwatch,
  due_label
};

#[derive(Properties, PartialEq)]
pub struct KanbanCardProps {
  pub todo:         TodoDto,
  pub swatch_color: String,
  pub timezone:     Tz,
  pub on_toggle:    Callback<TodoDto>,
  pub on_edit:      Callback<TodoDto>,
  pub on_delete:    Callback<String>
}

#[function_component(KanbanCard)]
pub fn kanban_card(
  props: &KanbanCardProps
) -> Html {
  let todo = props.todo.clone();
  let due = due_label(
    &todo.due_date,
    props.timezone
  );

  let toggle_label =
    if todo.completed {
      "Reopen"
    } else {
      "Done"
    };

  let on_toggle_click = {
    let on_toggle =
      props.on_toggle.clone();
    let todo = todo.clone();
    Callback::from(move |_| {
      on_toggle.emit(todo.clone());
    })
  };

  let on_edit_click = {
    let on_edit =
      props.on_edit.clone();
    let todo = todo.clone();
    Callback::from(move |_| {
      on_edit.emit(todo.clone());
    })
  };

  let on_delete_click = {
    let on_delete =
      props.on_delete.clone();
    let id = todo.id.clone();
    Callback::from(move |_| {
      on_delete.emit(id.clone());
    })
  };

  html! {
      <div class="kanban-card">
          <div class="kanban-card-title">
              <CategorySwatch color={props.swatch_color.clone()} />
              <span>{ &props.todo.title }</span>
          </div>
          {
              if props.todo.description.trim().is_empty() {
                  html! {}
              } else {
                  html! { <div class="task-subtitle">{ &props.todo.description }</div> }
              }
          }
          <div class="kanban-card-due">{ format!("due:{due}") }</div>
          <div class="kanban-card-actions">
              <button type="button" class="btn" onclick={on_toggle_click}>
                  { toggle_label }
              </button>
              <button type="button" class="btn" onclick={on_edit_click}>
                  { "Edit" }
              </button>
              <button type="button" class="btn danger" onclick={on_delete_click}>
                  { "Delete" }
              </button>
          </div>
      </div>
  }
}
