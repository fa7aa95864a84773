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
pub struct TodoListRowProps {
  pub todo:         TodoDto,
  pub swatch_color: String,
  pub timezone:     Tz,
  pub on_toggle:    Callback<TodoDto>,
  pub on_edit:      Callback<TodoDto>,
  pub on_delete:    Callback<String>
}

#[function_component(TodoListRow)]
pub fn todo_list_row(
  props: &TodoListRowProps
) -> Html {
  let todo = props.todo.clone();
  let id = todo.id.clone();

  let title_class = if todo.completed
  {
    "title completed"
  } else {
    "title"
  };

  let due = due_label(
    &todo.due_date,
    props.timezone
  );
  let has_description =
    !todo.description.trim().is_empty();

  let on_toggle_change = {
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
    let id = id.clone();
    Callback::from(move |_| {
      on_delete.emit(id.clone());
    })
  };

  html! {
      <div class="row">
          <input
              type="checkbox"
              checked={todo.completed}
              onchange={on_toggle_change}
          />
          <CategorySwatch color={props.swatch_color.clone()} />
          <div class="row-main">
              <div class={title_class}>{ &todo.title }</div>
              {
                  if has_description {
                      html! { <div class="task-subtitle">{ &todo.description }</div> }
                  } else {
                      html! {}
                  }
              }
              <span class="badge">{ format!("due:{due}") }</span>
          </div>
          <div class="row-actions">
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
